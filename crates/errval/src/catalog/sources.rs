//! Stock source table.

/// `(slot, identifier, description)`, append-only.
pub(crate) const STOCK_SOURCES: &[(u16, &str, &str)] = &[
    (0, "UNKNOWN", "Unspecified source"),
    (1, "GCRYPT", "gcrypt"),
    (2, "GPG", "GnuPG"),
    (3, "GPGSM", "GpgSM"),
    (4, "GPGAGENT", "GPG Agent"),
    (5, "PINENTRY", "Pinentry"),
    (6, "SCD", "SCD"),
    (7, "GPGME", "GPGME"),
    (8, "KEYBOX", "Keybox"),
    (9, "KSBA", "KSBA"),
    (10, "DIRMNGR", "Dirmngr"),
    (11, "GSTI", "GSTI"),
    (12, "GPA", "GPA"),
    (13, "KLEO", "Kleopatra"),
    (14, "G13", "G13"),
    (15, "ASSUAN", "Assuan"),
    (17, "TLS", "TLS"),
    (31, "ANY", "Any source"),
    (32, "USER_1", "User defined source 1"),
    (33, "USER_2", "User defined source 2"),
    (34, "USER_3", "User defined source 3"),
    (35, "USER_4", "User defined source 4"),
];
