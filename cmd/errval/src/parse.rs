//! Command-line forms of an error value.
//!
//!   1234            decimal
//!   0x05000011      hexadecimal
//!   GPG/TIMEOUT     SOURCE/CODE, each a name or a number
//!   TIMEOUT         CODE alone (unknown source)
//!   ENOENT          errno name (system code)

use anyhow::{anyhow, bail, Result};
use errval::{Catalog, ErrorCode, ErrorSource, ErrorValue};

pub fn parse_value(arg: &str, catalog: &Catalog) -> Result<ErrorValue> {
    let arg = arg.trim();
    if arg.is_empty() {
        bail!("empty value");
    }
    if let Some(raw) = parse_number(arg)? {
        return Ok(ErrorValue::from_raw(raw));
    }
    match arg.split_once('/') {
        Some((src, code)) => {
            let src = parse_source(src, catalog)?;
            let code = parse_code(code, catalog)?;
            Ok(ErrorValue::make(src, code))
        }
        None => Ok(ErrorValue::make_default(parse_code(arg, catalog)?)),
    }
}

fn parse_number(s: &str) -> Result<Option<u32>> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16)
            .map(Some)
            .map_err(|e| anyhow!("bad hex value {:?}: {}", s, e));
    }
    if s.bytes().all(|b| b.is_ascii_digit()) {
        return s
            .parse()
            .map(Some)
            .map_err(|e| anyhow!("bad decimal value {:?}: {}", s, e));
    }
    Ok(None)
}

fn parse_source(s: &str, catalog: &Catalog) -> Result<ErrorSource> {
    if let Some(n) = parse_number(s)? {
        if n as usize >= ErrorSource::DIM {
            bail!("source {} out of range (0-{})", n, ErrorSource::DIM - 1);
        }
        return Ok(ErrorSource::new(n as u8));
    }
    catalog
        .source_by_name(&s.to_ascii_uppercase())
        .ok_or_else(|| anyhow!("unknown source {:?}", s))
}

fn parse_code(s: &str, catalog: &Catalog) -> Result<ErrorCode> {
    if let Some(n) = parse_number(s)? {
        let n = u16::try_from(n).map_err(|_| anyhow!("code {} out of range (0-65535)", n))?;
        return Ok(ErrorCode::new(n));
    }
    catalog
        .code_by_name(&s.to_ascii_uppercase())
        .ok_or_else(|| anyhow!("unknown code {:?}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> Catalog {
        Catalog::stock()
    }

    #[test]
    fn numeric_forms() {
        let cat = stock();
        assert_eq!(parse_value("83886097", &cat).unwrap().raw(), 0x0500_0011);
        assert_eq!(parse_value("0x05000011", &cat).unwrap().raw(), 0x0500_0011);
        assert_eq!(parse_value("0X1", &cat).unwrap().raw(), 1);
        assert_eq!(parse_value("0", &cat).unwrap(), ErrorValue::OK);
    }

    #[test]
    fn symbolic_forms() {
        let cat = stock();
        let v = parse_value("gpg/timeout", &cat).unwrap();
        assert_eq!(v.source(), ErrorSource::GPG);
        assert_eq!(v.code(), ErrorCode::TIMEOUT);

        let v = parse_value("5/17", &cat).unwrap();
        assert_eq!(v.raw(), 0x0500_0011);

        let v = parse_value("CANCELED", &cat).unwrap();
        assert_eq!(v.source(), ErrorSource::UNKNOWN);
        assert_eq!(v.code(), ErrorCode::CANCELED);

        let v = parse_value("GPGME/ENOENT", &cat).unwrap();
        assert!(v.code().is_system());
        assert_eq!(v.source(), ErrorSource::GPGME);
    }

    #[test]
    fn rejects_garbage() {
        let cat = stock();
        assert!(parse_value("", &cat).is_err());
        assert!(parse_value("0xZZ", &cat).is_err());
        assert!(parse_value("99999999999", &cat).is_err());
        assert!(parse_value("NOPE", &cat).is_err());
        assert!(parse_value("NOPE/GENERAL", &cat).is_err());
        assert!(parse_value("128/GENERAL", &cat).is_err());
        assert!(parse_value("GPG/70000", &cat).is_err());
    }
}
