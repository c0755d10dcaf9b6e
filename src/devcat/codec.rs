//! # Line Codec
//!
//! Each device occupies one line of text:
//!
//! ```text
//! <Type>;<brand>;<model>;<price>;<variant-params>;<app1>|<app2>|...
//! ```
//!
//! - `<Type>` is `Smartphone` or `Laptop`.
//! - `<variant-params>` is `<os>-<memory_gb>` for phones and
//!   `<screen_inches>-<battery_wh>` for laptops.
//! - The app list may be empty; an empty last field means no apps.
//!
//! Both directions share the field order above. Older writers emitted the app
//! list before the variant params; such lines fail to decode instead of being
//! read with swapped fields.
//!
//! Delimiters are never escaped. [`encode_line`] refuses devices whose text
//! would not decode back to the same device, so a saved file always obeys the
//! round-trip law.

use crate::model::{Device, DeviceKind, Variant};
use thiserror::Error;

pub const FIELD_SEP: char = ';';
pub const APP_SEP: char = '|';
pub const PARAM_SEP: char = '-';

/// Why a single line could not be turned into a device.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("unknown device type '{0}'")]
    UnknownType(String),

    #[error("missing field '{0}'")]
    MissingField(&'static str),

    #[error("invalid {field} '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid variant parameters '{0}'")]
    InvalidVariantParams(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

impl LineError {
    /// True when the line was recognised but malformed. Unknown type tags
    /// are skipped without counting as parse errors.
    pub fn is_parse_error(&self) -> bool {
        !matches!(self, LineError::UnknownType(_))
    }
}

/// Why a device cannot be written without corrupting the line format.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("{field} '{value}' contains reserved character '{delimiter}'")]
    ReservedCharacter {
        field: &'static str,
        value: String,
        delimiter: char,
    },

    #[error("app names cannot be empty")]
    EmptyAppName,

    #[error("screen size {0} cannot be negative")]
    NegativeScreen(f64),
}

/// Encodes a device as a single line, without the trailing newline.
pub fn encode_line(device: &Device) -> Result<String, CodecError> {
    check_text("brand", device.brand(), &[])?;
    check_text("model", device.model(), &[])?;
    for app in device.apps() {
        if app.is_empty() {
            return Err(CodecError::EmptyAppName);
        }
        check_text("app", app, &[APP_SEP])?;
    }

    let params = match device.kind() {
        DeviceKind::Phone { os, memory_gb } => {
            check_text("os", os, &[PARAM_SEP])?;
            format!("{}{}{}", os, PARAM_SEP, memory_gb)
        }
        DeviceKind::Laptop {
            screen_inches,
            battery_wh,
        } => {
            if screen_inches.is_sign_negative() {
                return Err(CodecError::NegativeScreen(*screen_inches));
            }
            format!("{}{}{}", screen_inches, PARAM_SEP, battery_wh)
        }
    };

    let mut line = String::new();
    for field in [
        device.variant().tag(),
        device.brand(),
        device.model(),
        device.price().to_string().as_str(),
        params.as_str(),
    ] {
        line.push_str(field);
        line.push(FIELD_SEP);
    }
    for (i, app) in device.apps().iter().enumerate() {
        if i > 0 {
            line.push(APP_SEP);
        }
        line.push_str(app);
    }
    Ok(line)
}

/// Decodes one line into a device.
///
/// A line with only the five leading fields is accepted and yields no apps.
pub fn decode_line(line: &str) -> Result<Device, LineError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let mut fields = line.splitn(6, FIELD_SEP);

    let tag = fields.next().unwrap_or_default();
    let variant =
        Variant::from_tag(tag).ok_or_else(|| LineError::UnknownType(tag.to_string()))?;

    let brand = fields.next().ok_or(LineError::MissingField("brand"))?;
    let model = fields.next().ok_or(LineError::MissingField("model"))?;
    let price: f64 = parse_number("price", fields.next().ok_or(LineError::MissingField("price"))?)?;
    let params = fields
        .next()
        .ok_or(LineError::MissingField("variant parameters"))?;
    let apps = split_apps(fields.next().unwrap_or_default());

    let (first, second) = params
        .split_once(PARAM_SEP)
        .ok_or_else(|| LineError::InvalidVariantParams(params.to_string()))?;

    let kind = match variant {
        Variant::Phone => DeviceKind::Phone {
            os: first.to_string(),
            memory_gb: parse_number("memory", second)?,
        },
        Variant::Laptop => DeviceKind::Laptop {
            screen_inches: parse_number("screen size", first)?,
            battery_wh: parse_number("battery capacity", second)?,
        },
    };

    Ok(Device::new(brand, model, price, apps, kind))
}

fn split_apps(field: &str) -> Vec<String> {
    if field.is_empty() {
        return Vec::new();
    }
    field.split(APP_SEP).map(str::to_string).collect()
}

fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, LineError> {
    value.trim().parse().map_err(|_| LineError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn check_text(field: &'static str, value: &str, extra: &[char]) -> Result<(), CodecError> {
    let reserved = [FIELD_SEP, '\n', '\r'];
    match value
        .chars()
        .find(|c| reserved.contains(c) || extra.contains(c))
    {
        Some(delimiter) => Err(CodecError::ReservedCharacter {
            field,
            value: value.to_string(),
            delimiter,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iphone() -> Device {
        Device::phone(
            "Apple",
            "iPhone 15",
            999.99,
            vec!["Safari".into(), "Maps".into()],
            "iOS",
            128,
        )
    }

    fn thinkpad() -> Device {
        Device::laptop(
            "Lenovo",
            "ThinkPad X1",
            1450.5,
            vec!["VSCode".into()],
            14.0,
            57,
        )
    }

    #[test]
    fn encodes_phone_with_params_before_apps() {
        assert_eq!(
            encode_line(&iphone()).unwrap(),
            "Smartphone;Apple;iPhone 15;999.99;iOS-128;Safari|Maps"
        );
    }

    #[test]
    fn encodes_laptop_without_apps() {
        let laptop = Device::laptop("Dell", "XPS 15", 1899.0, vec![], 15.6, 86);
        assert_eq!(
            encode_line(&laptop).unwrap(),
            "Laptop;Dell;XPS 15;1899;15.6-86;"
        );
    }

    #[test]
    fn decodes_phone_line() {
        let device = decode_line("Smartphone;Samsung;Galaxy S24;799.5;Android-256;Chrome|Gmail")
            .unwrap();
        assert_eq!(device.variant(), Variant::Phone);
        assert_eq!(device.brand(), "Samsung");
        assert_eq!(device.model(), "Galaxy S24");
        assert_eq!(device.price(), 799.5);
        assert_eq!(device.os(), Some("Android"));
        assert_eq!(device.memory_gb(), Some(256));
        assert_eq!(device.apps(), ["Chrome", "Gmail"]);
    }

    #[test]
    fn decodes_laptop_line() {
        let device = decode_line("Laptop;Apple;MacBook Air;1199;13.6-52;Xcode").unwrap();
        assert_eq!(device.screen_inches(), Some(13.6));
        assert_eq!(device.battery_wh(), Some(52));
        assert_eq!(device.apps(), ["Xcode"]);
    }

    #[test]
    fn empty_app_field_means_no_apps() {
        let device = decode_line("Laptop;Dell;XPS 15;1899;15.6-86;").unwrap();
        assert!(device.apps().is_empty());

        let device = decode_line("Laptop;Dell;XPS 15;1899;15.6-86").unwrap();
        assert!(device.apps().is_empty());
    }

    #[test]
    fn strips_carriage_return() {
        let device = decode_line("Smartphone;Apple;iPhone;1;iOS-64;Notes\r").unwrap();
        assert_eq!(device.apps(), ["Notes"]);
    }

    #[test]
    fn round_trips_each_variant() {
        for device in [iphone(), thinkpad()] {
            let line = encode_line(&device).unwrap();
            assert_eq!(decode_line(&line).unwrap(), device);
        }
    }

    #[test]
    fn round_trip_keeps_awkward_prices_exact() {
        let device = Device::phone("Nokia", "3310", 0.1 + 0.2, vec![], "S30", 0);
        let line = encode_line(&device).unwrap();
        assert_eq!(decode_line(&line).unwrap().price(), 0.1 + 0.2);
    }

    #[test]
    fn rejects_legacy_apps_before_params_order() {
        let legacy = "Smartphone;Apple;iPhone 15;999.99;Safari|Maps;iOS-128";
        assert!(matches!(
            decode_line(legacy),
            Err(LineError::InvalidVariantParams(_))
        ));

        let legacy_laptop = "Laptop;Dell;XPS;1500;Word;15.6-86";
        assert!(decode_line(legacy_laptop).is_err());
    }

    #[test]
    fn unknown_type_is_not_a_parse_error() {
        let err = decode_line("Tablet;Apple;iPad;499;iPadOS-64;").unwrap_err();
        assert_eq!(err, LineError::UnknownType("Tablet".into()));
        assert!(!err.is_parse_error());
    }

    #[test]
    fn non_numeric_fields_are_parse_errors() {
        let err = decode_line("Laptop;Dell;XPS;cheap;15.6-86;").unwrap_err();
        assert_eq!(
            err,
            LineError::InvalidNumber {
                field: "price",
                value: "cheap".into()
            }
        );
        assert!(err.is_parse_error());

        assert!(matches!(
            decode_line("Smartphone;Apple;iPhone;999;iOS-lots;"),
            Err(LineError::InvalidNumber { field: "memory", .. })
        ));
        assert!(matches!(
            decode_line("Laptop;Dell;XPS;1500;big-86;"),
            Err(LineError::InvalidNumber {
                field: "screen size",
                ..
            })
        ));
    }

    #[test]
    fn truncated_lines_report_missing_field() {
        assert_eq!(
            decode_line("Laptop;Dell;XPS").unwrap_err(),
            LineError::MissingField("price")
        );
        assert_eq!(
            decode_line("Laptop;Dell;XPS;1500").unwrap_err(),
            LineError::MissingField("variant parameters")
        );
    }

    #[test]
    fn encode_refuses_reserved_characters() {
        let device = Device::phone("A;B", "M", 1.0, vec![], "iOS", 64);
        assert!(matches!(
            encode_line(&device),
            Err(CodecError::ReservedCharacter {
                field: "brand",
                delimiter: ';',
                ..
            })
        ));

        let device = Device::phone("A", "M", 1.0, vec!["x|y".into()], "iOS", 64);
        assert!(matches!(
            encode_line(&device),
            Err(CodecError::ReservedCharacter { field: "app", .. })
        ));

        let device = Device::phone("A", "M", 1.0, vec![], "Wear-OS", 64);
        assert!(matches!(
            encode_line(&device),
            Err(CodecError::ReservedCharacter { field: "os", .. })
        ));

        let device = Device::phone("A", "M", 1.0, vec![String::new()], "iOS", 64);
        assert_eq!(encode_line(&device), Err(CodecError::EmptyAppName));
    }

    #[test]
    fn dash_is_allowed_outside_variant_params() {
        let device = Device::laptop("HP", "Spectre x360-14", 1300.0, vec!["MS-Teams".into()], 13.5, 66);
        let line = encode_line(&device).unwrap();
        assert_eq!(decode_line(&line).unwrap(), device);
    }
}
