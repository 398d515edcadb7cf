mod common;
mod draft;
