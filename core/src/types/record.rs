use redb::TypeName;
use serde::{Deserialize, Serialize};

/// Vector path data for one icon.
///
/// Built-in pack entries carry only the primary path; custom icon sets may
/// additionally supply a secondary path and their own view box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    pub path: String,
    pub secondary_path: Option<String>,
    pub view_box: Option<String>,
}

impl IconRecord {
    pub fn from_path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            secondary_path: None,
            view_box: None,
        }
    }
}

const RECORD_VERSION_V1: u8 = 1;

/// Version-prefixed storage encoding of [`IconRecord`].
///
/// The leading byte selects the postcard schema, so records written by an
/// older build can be decoded after the layout grows new fields.
#[derive(Debug, Clone)]
pub enum StoredIcon {
    V1(IconRecord),
}

impl StoredIcon {
    pub fn into_latest(self) -> IconRecord {
        match self {
            StoredIcon::V1(record) => record,
        }
    }
}

impl redb::Value for StoredIcon {
    type SelfType<'a> = StoredIcon;
    type AsBytes<'a> = Vec<u8>;

    fn fixed_width() -> Option<usize> {
        None
    }

    fn from_bytes<'a>(data: &'a [u8]) -> Self::SelfType<'a>
    where
        Self: 'a,
    {
        let (version, data) = data.split_first().expect("empty data");
        match *version {
            RECORD_VERSION_V1 => {
                let record = postcard::from_bytes::<IconRecord>(data).expect("invalid icon record");
                StoredIcon::V1(record)
            }
            version => panic!("unsupported version: {}", version),
        }
    }

    fn as_bytes<'a, 'b: 'a>(value: &'a Self::SelfType<'b>) -> Self::AsBytes<'a>
    where
        Self: 'b,
    {
        match value {
            StoredIcon::V1(record) => {
                postcard::to_extend(record, vec![RECORD_VERSION_V1]).unwrap()
            }
        }
    }

    fn type_name() -> TypeName {
        TypeName::new("hearth::StoredIcon")
    }
}
