pub mod birthday;
