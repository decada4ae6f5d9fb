/// Deprecation data for one built-in icon name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecatedIcon {
    /// Platform release that drops the old name for good.
    pub removed_in: &'static str,
    /// New name to resolve instead, when the icon was renamed rather than
    /// removed outright.
    pub replacement: Option<&'static str>,
}

impl DeprecatedIcon {
    /// Human-readable warning for a lookup under the old name.
    pub fn warning(&self, prefix: &str, name: &str) -> String {
        match self.replacement {
            Some(replacement) => format!(
                "Icon {prefix}:{name} was renamed to {prefix}:{replacement}, please use the new name as it will be removed in version {}",
                self.removed_in
            ),
            None => format!(
                "Icon {prefix}:{name} was removed from the icon pack and has no replacement, it will stop rendering in version {}",
                self.removed_in
            ),
        }
    }
}

/// Sorted by old name; looked up with a binary search.
const DEPRECATED_ICONS: &[(&str, DeprecatedIcon)] = &[
    (
        "adobe",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: None,
        },
    ),
    (
        "adobe-acrobat",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: None,
        },
    ),
    (
        "amazon-drive",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: None,
        },
    ),
    (
        "android-auto",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: None,
        },
    ),
    (
        "android-debug-bridge",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: None,
        },
    ),
    (
        "face",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("face-man"),
        },
    ),
    (
        "face-outline",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("face-man-outline"),
        },
    ),
    (
        "face-profile-woman",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("face-woman-profile"),
        },
    ),
    (
        "face-shimmer",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("face-man-shimmer"),
        },
    ),
    (
        "google-controller",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("controller"),
        },
    ),
    (
        "google-controller-off",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("controller-off"),
        },
    ),
    (
        "hand",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("hand-back-right"),
        },
    ),
    (
        "hand-left",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("hand-back-left"),
        },
    ),
    (
        "hand-right",
        DeprecatedIcon {
            removed_in: "1.4.0",
            replacement: Some("hand-back-right"),
        },
    ),
    (
        "microsoft-edge-legacy",
        DeprecatedIcon {
            removed_in: "1.2.0",
            replacement: None,
        },
    ),
    (
        "microsoft-yammer",
        DeprecatedIcon {
            removed_in: "1.2.0",
            replacement: None,
        },
    ),
    (
        "telegram",
        DeprecatedIcon {
            removed_in: "1.2.0",
            replacement: None,
        },
    ),
    (
        "twitter-retweet",
        DeprecatedIcon {
            removed_in: "1.2.0",
            replacement: None,
        },
    ),
    (
        "untappd",
        DeprecatedIcon {
            removed_in: "1.2.0",
            replacement: None,
        },
    ),
    (
        "y-combinator",
        DeprecatedIcon {
            removed_in: "1.2.0",
            replacement: None,
        },
    ),
    (
        "youtube-gaming",
        DeprecatedIcon {
            removed_in: "1.2.0",
            replacement: None,
        },
    ),
];

/// Deprecation entry for `name`, if the built-in pack deprecated it.
pub fn deprecation_for(name: &str) -> Option<&'static DeprecatedIcon> {
    DEPRECATED_ICONS
        .binary_search_by_key(&name, |(old, _)| old)
        .ok()
        .map(|index| &DEPRECATED_ICONS[index].1)
}

#[cfg(test)]
mod tests;
