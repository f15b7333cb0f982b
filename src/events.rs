//! Event System
//!
//! Outcomes of dashboard operations, shown as notifications and kept in the activity log.

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// The part of the dashboard an event is about.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Source {
    Users,
    Shops,
    Session,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    /// Client-side validation failed; nothing was sent.
    Validation,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn success(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn error(source: Source, msg: impl Into<String>, log_level: LogLevel) -> Self {
        Self::new(source, msg.into(), EventType::Error, log_level)
    }

    pub fn refresh(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Refresh, LogLevel::Debug)
    }

    pub fn validation(source: Source, msg: impl Into<String>) -> Self {
        Self::new(source, msg.into(), EventType::Validation, LogLevel::Info)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self.event_type, EventType::Error | EventType::Validation)
    }

    pub fn should_display(&self) -> bool {
        // Always show outcomes the user acted on
        if self.event_type != EventType::Refresh || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.source, self.msg
        )
    }
}
