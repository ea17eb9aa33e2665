//! Stock system-error name table.
//!
//! A system code is `SYSTEM_ERROR | slot`, where the slot indexes this
//! list. The list is append-only and platform independent; the platform's
//! numeric errno for each name is resolved at init by the `sys` layer.
//! Descriptions are empty: system error text comes from the platform.

/// `(slot, errno identifier)`, append-only.
pub(crate) const STOCK_SYSTEM_NAMES: &[(u16, &str)] = &[
    (0, "E2BIG"),
    (1, "EACCES"),
    (2, "EADDRINUSE"),
    (3, "EADDRNOTAVAIL"),
    (4, "EAFNOSUPPORT"),
    (5, "EAGAIN"),
    (6, "EALREADY"),
    (7, "EBADF"),
    (8, "EBADMSG"),
    (9, "EBUSY"),
    (10, "ECANCELED"),
    (11, "ECHILD"),
    (12, "ECONNABORTED"),
    (13, "ECONNREFUSED"),
    (14, "ECONNRESET"),
    (15, "EDEADLK"),
    (16, "EDESTADDRREQ"),
    (17, "EDOM"),
    (18, "EDQUOT"),
    (19, "EEXIST"),
    (20, "EFAULT"),
    (21, "EFBIG"),
    (22, "EHOSTDOWN"),
    (23, "EHOSTUNREACH"),
    (24, "EIDRM"),
    (25, "EILSEQ"),
    (26, "EINPROGRESS"),
    (27, "EINTR"),
    (28, "EINVAL"),
    (29, "EIO"),
    (30, "EISCONN"),
    (31, "EISDIR"),
    (32, "ELOOP"),
    (33, "EMFILE"),
    (34, "EMLINK"),
    (35, "EMSGSIZE"),
    (36, "EMULTIHOP"),
    (37, "ENAMETOOLONG"),
    (38, "ENETDOWN"),
    (39, "ENETRESET"),
    (40, "ENETUNREACH"),
    (41, "ENFILE"),
    (42, "ENOBUFS"),
    (43, "ENODATA"),
    (44, "ENODEV"),
    (45, "ENOENT"),
    (46, "ENOEXEC"),
    (47, "ENOLCK"),
    (48, "ENOLINK"),
    (49, "ENOMEM"),
    (50, "ENOMSG"),
    (51, "ENOPROTOOPT"),
    (52, "ENOSPC"),
    (53, "ENOSR"),
    (54, "ENOSTR"),
    (55, "ENOSYS"),
    (56, "ENOTBLK"),
    (57, "ENOTCONN"),
    (58, "ENOTDIR"),
    (59, "ENOTEMPTY"),
    (60, "ENOTRECOVERABLE"),
    (61, "ENOTSOCK"),
    (62, "ENOTSUP"),
    (63, "ENOTTY"),
    (64, "ENXIO"),
    (65, "EOPNOTSUPP"),
    (66, "EOVERFLOW"),
    (67, "EOWNERDEAD"),
    (68, "EPERM"),
    (69, "EPFNOSUPPORT"),
    (70, "EPIPE"),
    (71, "EPROTO"),
    (72, "EPROTONOSUPPORT"),
    (73, "EPROTOTYPE"),
    (74, "ERANGE"),
    (75, "EREMOTE"),
    (76, "EROFS"),
    (77, "ESHUTDOWN"),
    (78, "ESOCKTNOSUPPORT"),
    (79, "ESPIPE"),
    (80, "ESRCH"),
    (81, "ESTALE"),
    (82, "ETIME"),
    (83, "ETIMEDOUT"),
    (84, "ETOOMANYREFS"),
    (85, "ETXTBSY"),
    (86, "EUSERS"),
    (87, "EWOULDBLOCK"),
    (88, "EXDEV"),
];
