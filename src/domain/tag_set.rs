//! Tag sets and the content identifier

use mp4ameta::{Data, DataIdent, Fourcc, Tag};
use std::fmt;

/// Item holding the iTunes content identifier.
pub const CONTENT_ID: Fourcc = Fourcc(*b"cnID");

/// Unsigned numeric content identifier, compared by value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentId(u32);

impl ContentId {
    pub fn new(value: u32) -> Self {
        ContentId(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// Decode a big-endian integer payload. Payloads wider than four bytes
    /// are accepted as long as the value still fits.
    pub fn from_be_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() || bytes.len() > 8 {
            return None;
        }

        let wide = bytes
            .iter()
            .fold(0u64, |acc, byte| (acc << 8) | u64::from(*byte));
        u32::try_from(wide).ok().map(ContentId)
    }

    /// Encode as the integer item stored in the container.
    pub fn to_data(self) -> Data {
        Data::BeSigned(self.0.to_be_bytes().to_vec())
    }
}

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The metadata items of one container, detached from its file.
///
/// Items keep the order in which they were read so that storing a set
/// onto another container reproduces it exactly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSet {
    items: Vec<(DataIdent, Data)>,
}

impl TagSet {
    /// Create an empty tag set
    pub fn new() -> Self {
        TagSet { items: Vec::new() }
    }

    /// Copy every item out of a parsed tag
    pub fn from_tag(tag: &Tag) -> Self {
        let items = tag
            .data()
            .map(|(ident, data)| (ident.clone(), data.clone()))
            .collect();
        TagSet { items }
    }

    /// Replace every item of `tag` with the items of this set
    pub fn apply_to(&self, tag: &mut Tag) {
        tag.clear();
        for (ident, data) in &self.items {
            tag.add_data(ident.clone(), data.clone());
        }
    }

    pub fn push(&mut self, ident: impl Into<DataIdent>, data: Data) {
        self.items.push((ident.into(), data));
    }

    /// Set a single-valued item, dropping previous values
    pub fn set(&mut self, ident: impl Into<DataIdent>, data: Data) {
        let ident = ident.into();
        self.items.retain(|(existing, _)| *existing != ident);
        self.items.push((ident, data));
    }

    pub fn get<'a>(&'a self, ident: &'a DataIdent) -> impl Iterator<Item = &'a Data> + 'a {
        self.items
            .iter()
            .filter(move |(existing, _)| existing == ident)
            .map(|(_, data)| data)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The first decodable `cnID` value, if any
    pub fn content_id(&self) -> Option<ContentId> {
        let ident = DataIdent::from(CONTENT_ID);
        let id = self.get(&ident).find_map(|data| match data {
            Data::BeSigned(bytes) | Data::Reserved(bytes) => ContentId::from_be_bytes(bytes),
            _ => None,
        });
        id
    }

    pub fn set_content_id(&mut self, id: ContentId) {
        self.set(CONTENT_ID, id.to_data());
    }
}
