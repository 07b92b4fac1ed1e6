mod check_manifest;

pub use check_manifest::cmd_check_manifest;
