use serde::Serialize;

/// One entry of the media directory as seen by the browser.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub path: String,
}

impl FileDescriptor {
    pub fn new(name: String, url_prefix: &str) -> Self {
        let kind = file_type(&name).to_string();
        let path = format!("{url_prefix}{name}");
        Self { name, kind, path }
    }
}

#[derive(Serialize, Debug)]
pub struct MediaListing {
    pub files: Vec<FileDescriptor>,
}

/// Everything after the last `.`, or `""` when the name has none.
/// A dot in first position does not start an extension, so `.env` has none.
pub fn file_type(name: &str) -> &str {
    match name.rfind('.') {
        None | Some(0) => "",
        Some(i) => &name[i + 1..],
    }
}
