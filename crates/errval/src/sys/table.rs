//! Platform errno values, keyed by the names in the system-error table.
//!
//! Aliases (`EWOULDBLOCK` = `EAGAIN` on most systems) appear as separate
//! rows; the first row for a value wins when mapping errno to code.

cfg_if::cfg_if! {
    if #[cfg(target_os = "linux")] {
        const TABLE: &[(&str, i32)] = &[
            ("E2BIG", libc::E2BIG),
            ("EACCES", libc::EACCES),
            ("EADDRINUSE", libc::EADDRINUSE),
            ("EADDRNOTAVAIL", libc::EADDRNOTAVAIL),
            ("EAFNOSUPPORT", libc::EAFNOSUPPORT),
            ("EAGAIN", libc::EAGAIN),
            ("EALREADY", libc::EALREADY),
            ("EBADF", libc::EBADF),
            ("EBADMSG", libc::EBADMSG),
            ("EBUSY", libc::EBUSY),
            ("ECANCELED", libc::ECANCELED),
            ("ECHILD", libc::ECHILD),
            ("ECONNABORTED", libc::ECONNABORTED),
            ("ECONNREFUSED", libc::ECONNREFUSED),
            ("ECONNRESET", libc::ECONNRESET),
            ("EDEADLK", libc::EDEADLK),
            ("EDESTADDRREQ", libc::EDESTADDRREQ),
            ("EDOM", libc::EDOM),
            ("EDQUOT", libc::EDQUOT),
            ("EEXIST", libc::EEXIST),
            ("EFAULT", libc::EFAULT),
            ("EFBIG", libc::EFBIG),
            ("EHOSTDOWN", libc::EHOSTDOWN),
            ("EHOSTUNREACH", libc::EHOSTUNREACH),
            ("EIDRM", libc::EIDRM),
            ("EILSEQ", libc::EILSEQ),
            ("EINPROGRESS", libc::EINPROGRESS),
            ("EINTR", libc::EINTR),
            ("EINVAL", libc::EINVAL),
            ("EIO", libc::EIO),
            ("EISCONN", libc::EISCONN),
            ("EISDIR", libc::EISDIR),
            ("ELOOP", libc::ELOOP),
            ("EMFILE", libc::EMFILE),
            ("EMLINK", libc::EMLINK),
            ("EMSGSIZE", libc::EMSGSIZE),
            ("EMULTIHOP", libc::EMULTIHOP),
            ("ENAMETOOLONG", libc::ENAMETOOLONG),
            ("ENETDOWN", libc::ENETDOWN),
            ("ENETRESET", libc::ENETRESET),
            ("ENETUNREACH", libc::ENETUNREACH),
            ("ENFILE", libc::ENFILE),
            ("ENOBUFS", libc::ENOBUFS),
            ("ENODATA", libc::ENODATA),
            ("ENODEV", libc::ENODEV),
            ("ENOENT", libc::ENOENT),
            ("ENOEXEC", libc::ENOEXEC),
            ("ENOLCK", libc::ENOLCK),
            ("ENOLINK", libc::ENOLINK),
            ("ENOMEM", libc::ENOMEM),
            ("ENOMSG", libc::ENOMSG),
            ("ENOPROTOOPT", libc::ENOPROTOOPT),
            ("ENOSPC", libc::ENOSPC),
            ("ENOSR", libc::ENOSR),
            ("ENOSTR", libc::ENOSTR),
            ("ENOSYS", libc::ENOSYS),
            ("ENOTBLK", libc::ENOTBLK),
            ("ENOTCONN", libc::ENOTCONN),
            ("ENOTDIR", libc::ENOTDIR),
            ("ENOTEMPTY", libc::ENOTEMPTY),
            ("ENOTRECOVERABLE", libc::ENOTRECOVERABLE),
            ("ENOTSOCK", libc::ENOTSOCK),
            ("ENOTSUP", libc::ENOTSUP),
            ("ENOTTY", libc::ENOTTY),
            ("ENXIO", libc::ENXIO),
            ("EOPNOTSUPP", libc::EOPNOTSUPP),
            ("EOVERFLOW", libc::EOVERFLOW),
            ("EOWNERDEAD", libc::EOWNERDEAD),
            ("EPERM", libc::EPERM),
            ("EPFNOSUPPORT", libc::EPFNOSUPPORT),
            ("EPIPE", libc::EPIPE),
            ("EPROTO", libc::EPROTO),
            ("EPROTONOSUPPORT", libc::EPROTONOSUPPORT),
            ("EPROTOTYPE", libc::EPROTOTYPE),
            ("ERANGE", libc::ERANGE),
            ("EREMOTE", libc::EREMOTE),
            ("EROFS", libc::EROFS),
            ("ESHUTDOWN", libc::ESHUTDOWN),
            ("ESOCKTNOSUPPORT", libc::ESOCKTNOSUPPORT),
            ("ESPIPE", libc::ESPIPE),
            ("ESRCH", libc::ESRCH),
            ("ESTALE", libc::ESTALE),
            ("ETIME", libc::ETIME),
            ("ETIMEDOUT", libc::ETIMEDOUT),
            ("ETOOMANYREFS", libc::ETOOMANYREFS),
            ("ETXTBSY", libc::ETXTBSY),
            ("EUSERS", libc::EUSERS),
            ("EWOULDBLOCK", libc::EWOULDBLOCK),
            ("EXDEV", libc::EXDEV),
        ];
    } else if #[cfg(unix)] {
        const TABLE: &[(&str, i32)] = &[
            ("E2BIG", libc::E2BIG),
            ("EACCES", libc::EACCES),
            ("EADDRINUSE", libc::EADDRINUSE),
            ("EADDRNOTAVAIL", libc::EADDRNOTAVAIL),
            ("EAFNOSUPPORT", libc::EAFNOSUPPORT),
            ("EAGAIN", libc::EAGAIN),
            ("EALREADY", libc::EALREADY),
            ("EBADF", libc::EBADF),
            ("EBUSY", libc::EBUSY),
            ("ECHILD", libc::ECHILD),
            ("ECONNABORTED", libc::ECONNABORTED),
            ("ECONNREFUSED", libc::ECONNREFUSED),
            ("ECONNRESET", libc::ECONNRESET),
            ("EDEADLK", libc::EDEADLK),
            ("EDESTADDRREQ", libc::EDESTADDRREQ),
            ("EDOM", libc::EDOM),
            ("EEXIST", libc::EEXIST),
            ("EFAULT", libc::EFAULT),
            ("EFBIG", libc::EFBIG),
            ("EHOSTUNREACH", libc::EHOSTUNREACH),
            ("EINPROGRESS", libc::EINPROGRESS),
            ("EINTR", libc::EINTR),
            ("EINVAL", libc::EINVAL),
            ("EIO", libc::EIO),
            ("EISCONN", libc::EISCONN),
            ("EISDIR", libc::EISDIR),
            ("ELOOP", libc::ELOOP),
            ("EMFILE", libc::EMFILE),
            ("EMLINK", libc::EMLINK),
            ("EMSGSIZE", libc::EMSGSIZE),
            ("ENAMETOOLONG", libc::ENAMETOOLONG),
            ("ENETDOWN", libc::ENETDOWN),
            ("ENETRESET", libc::ENETRESET),
            ("ENETUNREACH", libc::ENETUNREACH),
            ("ENFILE", libc::ENFILE),
            ("ENOBUFS", libc::ENOBUFS),
            ("ENODEV", libc::ENODEV),
            ("ENOENT", libc::ENOENT),
            ("ENOEXEC", libc::ENOEXEC),
            ("ENOLCK", libc::ENOLCK),
            ("ENOMEM", libc::ENOMEM),
            ("ENOPROTOOPT", libc::ENOPROTOOPT),
            ("ENOSPC", libc::ENOSPC),
            ("ENOSYS", libc::ENOSYS),
            ("ENOTCONN", libc::ENOTCONN),
            ("ENOTDIR", libc::ENOTDIR),
            ("ENOTEMPTY", libc::ENOTEMPTY),
            ("ENOTSOCK", libc::ENOTSOCK),
            ("ENOTTY", libc::ENOTTY),
            ("ENXIO", libc::ENXIO),
            ("EOPNOTSUPP", libc::EOPNOTSUPP),
            ("EPERM", libc::EPERM),
            ("EPIPE", libc::EPIPE),
            ("EPROTONOSUPPORT", libc::EPROTONOSUPPORT),
            ("EPROTOTYPE", libc::EPROTOTYPE),
            ("ERANGE", libc::ERANGE),
            ("EROFS", libc::EROFS),
            ("ESPIPE", libc::ESPIPE),
            ("ESRCH", libc::ESRCH),
            ("ETIMEDOUT", libc::ETIMEDOUT),
            ("ETXTBSY", libc::ETXTBSY),
            ("EWOULDBLOCK", libc::EWOULDBLOCK),
            ("EXDEV", libc::EXDEV),
        ];
    } else {
        const TABLE: &[(&str, i32)] = &[];
    }
}

/// `(errno identifier, platform value)` rows for this target.
pub fn errno_table() -> &'static [(&'static str, i32)] {
    TABLE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_positive() {
        assert!(errno_table().iter().all(|&(_, v)| v > 0));
    }

    #[cfg(unix)]
    #[test]
    fn core_posix_names_present() {
        for name in ["EPERM", "ENOENT", "EINTR", "EIO", "EINVAL", "EPIPE", "ERANGE"] {
            assert!(errno_table().iter().any(|&(n, _)| n == name), "{}", name);
        }
    }
}
