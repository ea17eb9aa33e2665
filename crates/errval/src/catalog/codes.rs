//! Stock code table.
//!
//! Slots are permanent. Retired codes keep their slot; new codes are
//! appended at the end of the stock range.

// ── Stock error conditions ────────────────────────────────────────

/// `(slot, identifier, description)`, append-only.
pub(crate) const STOCK_CODES: &[(u16, &str, &str)] = &[
    (0, "NO_ERROR", "Success"),
    (1, "GENERAL", "General error"),
    (2, "UNKNOWN_PACKET", "Unknown packet"),
    (3, "UNKNOWN_VERSION", "Unknown version in packet"),
    (4, "PUBKEY_ALGO", "Invalid public key algorithm"),
    (5, "DIGEST_ALGO", "Invalid digest algorithm"),
    (6, "BAD_PUBKEY", "Bad public key"),
    (7, "BAD_SECKEY", "Bad secret key"),
    (8, "BAD_SIGNATURE", "Bad signature"),
    (9, "NO_PUBKEY", "No public key"),
    (10, "CHECKSUM", "Checksum error"),
    (11, "BAD_PASSPHRASE", "Bad passphrase"),
    (12, "CIPHER_ALGO", "Invalid cipher algorithm"),
    (13, "KEYRING_OPEN", "Keyring open"),
    (14, "INV_PACKET", "Invalid packet"),
    (15, "INV_ARMOR", "Invalid armor"),
    (16, "NO_USER_ID", "No user ID"),
    (17, "NO_SECKEY", "No secret key"),
    (18, "WRONG_SECKEY", "Wrong secret key used"),
    (19, "BAD_KEY", "Bad session key"),
    (20, "COMPR_ALGO", "Unknown compression algorithm"),
    (21, "NO_PRIME", "Number is not prime"),
    (22, "NO_ENCODING_METHOD", "Invalid encoding method"),
    (23, "NO_ENCRYPTION_SCHEME", "Invalid encryption scheme"),
    (24, "NO_SIGNATURE_SCHEME", "Invalid signature scheme"),
    (25, "INV_ATTR", "Invalid attribute"),
    (26, "NO_VALUE", "No value"),
    (27, "NOT_FOUND", "Not found"),
    (28, "VALUE_NOT_FOUND", "Value not found"),
    (29, "SYNTAX", "Syntax error"),
    (30, "BAD_MPI", "Bad MPI value"),
    (31, "INV_PASSPHRASE", "Invalid passphrase"),
    (32, "SIG_CLASS", "Invalid signature class"),
    (33, "RESOURCE_LIMIT", "Resources exhausted"),
    (34, "INV_KEYRING", "Invalid keyring"),
    (35, "TRUSTDB", "Trust DB error"),
    (36, "BAD_CERT", "Bad certificate"),
    (37, "INV_USER_ID", "Invalid user ID"),
    (38, "UNEXPECTED", "Unexpected error"),
    (39, "TIME_CONFLICT", "Time conflict"),
    (40, "KEYSERVER", "Keyserver error"),
    (41, "WRONG_PUBKEY_ALGO", "Wrong public key algorithm"),
    (42, "TRIBUTE_TO_D_A", "Tribute to D. A."),
    (43, "WEAK_KEY", "Weak encryption key"),
    (44, "INV_KEYLEN", "Invalid key length"),
    (45, "INV_ARG", "Invalid argument"),
    (46, "BAD_URI", "Syntax error in URI"),
    (47, "INV_URI", "Invalid URI"),
    (48, "NETWORK", "Network error"),
    (49, "UNKNOWN_HOST", "Unknown host"),
    (50, "SELFTEST_FAILED", "Selftest failed"),
    (51, "NOT_ENCRYPTED", "Data not encrypted"),
    (52, "NOT_PROCESSED", "Data not processed"),
    (53, "UNUSABLE_PUBKEY", "Unusable public key"),
    (54, "UNUSABLE_SECKEY", "Unusable secret key"),
    (55, "INV_VALUE", "Invalid value"),
    (56, "BAD_CERT_CHAIN", "Bad certificate chain"),
    (57, "MISSING_CERT", "Missing certificate"),
    (58, "NO_DATA", "No data"),
    (59, "BUG", "Bug"),
    (60, "NOT_SUPPORTED", "Not supported"),
    (61, "INV_OP", "Invalid operation code"),
    (62, "TIMEOUT", "Timeout"),
    (63, "INTERNAL", "Internal error"),
    (64, "EOF_GCRYPT", "EOF (gcrypt)"),
    (65, "INV_OBJ", "Invalid object"),
    (66, "TOO_SHORT", "Provided object is too short"),
    (67, "TOO_LARGE", "Provided object is too large"),
    (68, "NO_OBJ", "Missing item in object"),
    (69, "NOT_IMPLEMENTED", "Not implemented"),
    (70, "CONFLICT", "Conflicting use"),
    (71, "INV_CIPHER_MODE", "Invalid cipher mode"),
    (72, "INV_FLAG", "Invalid flag"),
    (73, "INV_HANDLE", "Invalid handle"),
    (74, "TRUNCATED", "Result truncated"),
    (75, "INCOMPLETE_LINE", "Incomplete line"),
    (76, "INV_RESPONSE", "Invalid response"),
    (77, "NO_AGENT", "No agent running"),
    (78, "AGENT", "Agent error"),
    (79, "INV_DATA", "Invalid data"),
    (80, "ASSUAN_SERVER_FAULT", "Unspecific Assuan server fault"),
    (81, "ASSUAN", "General Assuan error"),
    (82, "INV_SESSION_KEY", "Invalid session key"),
    (83, "INV_SEXP", "Invalid S-expression"),
    (84, "UNSUPPORTED_ALGORITHM", "Unsupported algorithm"),
    (85, "NO_PIN_ENTRY", "No pinentry"),
    (86, "PIN_ENTRY", "pinentry error"),
    (87, "BAD_PIN", "Bad PIN"),
    (88, "INV_NAME", "Invalid name"),
    (89, "BAD_DATA", "Bad data"),
    (90, "INV_PARAMETER", "Invalid parameter"),
    (91, "WRONG_CARD", "Wrong card"),
    (92, "NO_DIRMNGR", "No dirmngr"),
    (93, "DIRMNGR", "dirmngr error"),
    (94, "CERT_REVOKED", "Certificate revoked"),
    (95, "NO_CRL_KNOWN", "No CRL known"),
    (96, "CRL_TOO_OLD", "CRL too old"),
    (97, "LINE_TOO_LONG", "Line too long"),
    (98, "NOT_TRUSTED", "Not trusted"),
    (99, "CANCELED", "Operation cancelled"),
    // ── Application range ──
    (1024, "USER_1", "User defined error code 1"),
    (1025, "USER_2", "User defined error code 2"),
    (1026, "USER_3", "User defined error code 3"),
    (1027, "USER_4", "User defined error code 4"),
    (1028, "USER_5", "User defined error code 5"),
    (1029, "USER_6", "User defined error code 6"),
    (1030, "USER_7", "User defined error code 7"),
    (1031, "USER_8", "User defined error code 8"),
    (1032, "USER_9", "User defined error code 9"),
    (1033, "USER_10", "User defined error code 10"),
    (1034, "USER_11", "User defined error code 11"),
    (1035, "USER_12", "User defined error code 12"),
    (1036, "USER_13", "User defined error code 13"),
    (1037, "USER_14", "User defined error code 14"),
    (1038, "USER_15", "User defined error code 15"),
    (1039, "USER_16", "User defined error code 16"),
    // ── Errno bridge sentinels ──
    (16381, "MISSING_ERRNO", "Missing errno value"),
    (16382, "UNKNOWN_ERRNO", "Unknown system error"),
    (16383, "EOF", "End of file"),
];
