pub mod birthday_mapper;
pub mod import_mapper;
pub mod reminder_mapper;

pub use birthday_mapper::BirthdayMapper;
pub use import_mapper::ImportMapper;
pub use reminder_mapper::ReminderMapper;
