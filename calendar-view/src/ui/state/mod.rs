pub mod calendar_state;
