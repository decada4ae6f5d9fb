use nutype::nutype;
use redb::TypeName;
use std::cmp::Ordering;
use std::str;

pub const MAX_ICON_NAME_LENGTH: usize = 128;

/// Prefixes resolved through the built-in chunked icon packs. Every other
/// prefix goes through the pluggable icon-set registry.
pub const BUILTIN_PREFIXES: &[&str] = &["mdi", "hass", "hassio", "hademo"];

pub fn is_builtin_prefix(prefix: &str) -> bool {
    BUILTIN_PREFIXES.contains(&prefix)
}

/// Splits `prefix:name` on the first colon.
///
/// Returns `None` when the colon is absent or either side is empty; callers
/// treat such input as a literal icon reference.
pub fn split_icon(icon: &str) -> Option<(&str, &str)> {
    let (prefix, name) = icon.split_once(':')?;
    if prefix.is_empty() || name.is_empty() {
        return None;
    }
    Some((prefix, name))
}

/// The name half of an icon identifier, used as the persistent cache key.
#[nutype(
    new_unchecked,
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_ICON_NAME_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct IconName(String);

impl redb::Key for IconName {
    fn compare(data1: &[u8], data2: &[u8]) -> Ordering {
        let s1 = str::from_utf8(data1).expect("invalid UTF-8 in icon name");
        let s2 = str::from_utf8(data2).expect("invalid UTF-8 in icon name");

        s1.cmp(s2)
    }
}

impl redb::Value for IconName {
    type SelfType<'a> = Self;
    type AsBytes<'a> = &'a [u8];

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let s = str::from_utf8(data).expect("invalid UTF-8 in icon name");
        Self::try_from(s).unwrap()
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        value.as_bytes()
    }

    fn type_name() -> TypeName {
        TypeName::new("hearth::IconName")
    }
}
