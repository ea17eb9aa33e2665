//! One-time process setup.
//!
//! The process state is the catalog plus two maps joined from it and the
//! platform errno table:
//!
//! - forward: platform errno → system code (dense, indexed by errno)
//! - reverse: system slot → platform errno (dense, indexed by slot)
//!
//! It is built exactly once, either by an explicit [`init`] call or by the
//! first operation that needs it. Both paths are safe to mix and repeat.

use std::sync::OnceLock;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::InitError;
use crate::{edebug, log, sys, ErrorCode};

pub(crate) struct State {
    pub(crate) catalog: Catalog,
    forward: Vec<ErrorCode>,
    reverse: Vec<i32>,
}

impl State {
    fn build(catalog: Catalog) -> Self {
        let table = sys::errno_table();
        let max_errno = table.iter().map(|&(_, v)| v).max().unwrap_or(0).max(0) as usize;
        let slots = catalog.system().max_slot().map_or(0, |s| s as usize + 1);

        let mut forward = vec![ErrorCode::UNKNOWN_ERRNO; max_errno + 1];
        let mut reverse = vec![0i32; slots];
        let mut mapped = 0usize;

        for &(name, errno) in table {
            if errno <= 0 {
                continue;
            }
            let Some(entry) = catalog.system().find(name) else {
                continue;
            };
            let fwd = &mut forward[errno as usize];
            if *fwd == ErrorCode::UNKNOWN_ERRNO {
                *fwd = ErrorCode::system(entry.slot);
                mapped += 1;
            }
            let rev = &mut reverse[entry.slot as usize];
            if *rev == 0 {
                *rev = errno;
            }
        }

        edebug!(
            "init: {} sources, {} codes, {} system names, {}/{} platform errnos mapped",
            catalog.sources().len(),
            catalog.codes().len(),
            catalog.system().len(),
            mapped,
            table.len()
        );

        Self { catalog, forward, reverse }
    }

    /// System code for a platform errno, if mapped.
    #[inline]
    pub(crate) fn code_for_errno(&self, errno: i32) -> Option<ErrorCode> {
        usize::try_from(errno)
            .ok()
            .and_then(|i| self.forward.get(i))
            .copied()
            .filter(|&c| c != ErrorCode::UNKNOWN_ERRNO)
    }

    /// Platform errno for a system code; 0 if none.
    #[inline]
    pub(crate) fn errno_for_code(&self, code: ErrorCode) -> i32 {
        code.system_slot()
            .and_then(|slot| self.reverse.get(slot as usize))
            .copied()
            .unwrap_or(0)
    }
}

static STATE: OnceLock<State> = OnceLock::new();

/// Process state, built from the stock catalog on first use.
#[inline]
pub(crate) fn state() -> &'static State {
    STATE.get_or_init(|| State::build(Catalog::stock()))
}

/// Initialize the library. Idempotent; calling it is optional.
pub fn init() {
    log::init();
    state();
}

/// Initialize with a custom catalog.
///
/// Must run before anything else touches the library: fails with
/// [`InitError::AlreadyInitialized`] once the state exists.
pub fn init_with(catalog: Catalog) -> Result<(), InitError> {
    let mut installed = false;
    STATE.get_or_init(|| {
        installed = true;
        State::build(catalog)
    });
    if installed {
        Ok(())
    } else {
        Err(InitError::AlreadyInitialized)
    }
}

/// Validate `config`, install its tables and then apply its logging
/// settings. Nothing is applied if installing fails.
pub fn init_from_config(config: &Config) -> Result<(), InitError> {
    config.validate().map_err(InitError::Config)?;
    if is_initialized() {
        return Err(InitError::AlreadyInitialized);
    }
    let catalog = config.load_catalog()?;
    init_with(catalog)?;
    config.apply_logging();
    Ok(())
}

pub fn is_initialized() -> bool {
    STATE.get().is_some()
}

/// The catalog in use.
pub fn catalog() -> &'static Catalog {
    &state().catalog
}

/// Teardown hook for embedders. The state is immutable and needs no
/// teardown, so this does nothing.
pub fn deinit(mode: i32) {
    edebug!("deinit(mode={}): nothing to release", mode);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Table;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        assert!(is_initialized());
        deinit(0);
        assert!(is_initialized());
    }

    #[test]
    fn init_with_after_init_fails() {
        init();
        let err = init_with(Catalog::stock()).unwrap_err();
        assert!(matches!(err, InitError::AlreadyInitialized));
    }

    #[test]
    fn init_from_config_checks_config_first() {
        let cfg = Config::new().code_table("");
        assert!(matches!(init_from_config(&cfg), Err(InitError::Config(_))));
    }

    #[test]
    fn init_from_config_after_init_fails() {
        init();
        assert!(matches!(
            init_from_config(&Config::new()),
            Err(InitError::AlreadyInitialized)
        ));
    }

    #[test]
    fn failed_init_from_config_leaves_logging_alone() {
        init();
        let before = log::flush_enabled();
        let cfg = Config::new().flush_log(!before);
        assert!(init_from_config(&cfg).is_err());
        assert_eq!(log::flush_enabled(), before);
    }

    #[test]
    fn build_joins_platform_table() {
        let state = State::build(Catalog::stock());
        for &(name, errno) in sys::errno_table() {
            let code = state.code_for_errno(errno).unwrap();
            let back = state.errno_for_code(code);
            assert_eq!(back, errno, "{}", name);
        }
        assert_eq!(state.code_for_errno(0), None);
        assert_eq!(state.code_for_errno(-1), None);
        assert_eq!(state.code_for_errno(i32::MAX), None);
        assert_eq!(state.errno_for_code(ErrorCode::GENERAL), 0);
    }

    fn system_catalog(slot: u16) -> Catalog {
        use crate::catalog::{Entry, TableKind};

        let system = Table::from_entries(
            TableKind::System,
            vec![Entry { slot, name: "EPIPE".into(), description: "".into() }],
        )
        .unwrap();
        Catalog::builder().system(system).unwrap().build()
    }

    #[test]
    fn highest_system_slot_round_trips() {
        let state = State::build(system_catalog(0x7FFF));
        #[cfg(unix)]
        {
            let code = state.code_for_errno(libc::EPIPE).unwrap();
            assert_eq!(code, ErrorCode::system(0x7FFF));
            assert_eq!(state.errno_for_code(code), libc::EPIPE);
        }
        assert_eq!(state.errno_for_code(ErrorCode::system(0x7FFE)), 0);
    }

    #[test]
    fn system_slot_past_the_flag_is_refused() {
        use crate::catalog::{Entry, TableKind};

        let rows = vec![Entry { slot: 0x8005, name: "EPIPE".into(), description: "".into() }];
        assert!(Table::from_entries(TableKind::System, rows).is_err());
    }

    #[test]
    fn build_with_partial_name_table() {
        let state = State::build(system_catalog(500));
        #[cfg(unix)]
        {
            assert_eq!(state.code_for_errno(libc::EPIPE), Some(ErrorCode::system(500)));
            assert_eq!(state.errno_for_code(ErrorCode::system(500)), libc::EPIPE);
            assert_eq!(state.code_for_errno(libc::ENOENT), None);
        }
        assert_eq!(state.errno_for_code(ErrorCode::system(1)), 0);
    }
}
