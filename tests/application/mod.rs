mod chat_service_test;
mod size_guard_test;
