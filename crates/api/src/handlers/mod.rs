pub mod assignments;
pub mod companies;
pub mod drafts;
pub mod layout;
