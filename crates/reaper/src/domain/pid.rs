use nix::unistd::Pid;
use std::ffi::OsStr;

/// Interpret a process table entry name as a pid.
///
/// Only non-empty, all-digit names that fit a positive `i32` qualify.
/// Zero is rejected: signalling pid 0 targets our own process group.
pub fn parse_pid(name: &OsStr) -> Option<Pid> {
    let name = name.to_str()?;
    if name.is_empty() || !name.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match name.parse::<i32>() {
        Ok(raw) if raw > 0 => Some(Pid::from_raw(raw)),
        _ => None,
    }
}
