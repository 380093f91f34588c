pub mod resume;

pub use resume::{
    buzzword_list, sort_experiences_by_earliest_start_date, Experience, Resume, Role,
};
