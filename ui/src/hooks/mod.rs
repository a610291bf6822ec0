pub mod use_daemon_checker;
