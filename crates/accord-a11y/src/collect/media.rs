use serde::Serialize;

use crate::tree::{ElementId, Tree};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
    Embed,
    Object,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackInfo {
    pub element: ElementId,
    /// `kind`, defaulting to `subtitles`
    pub kind: String,
    pub src_lang: Option<String>,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaInfo {
    pub element: ElementId,
    pub kind: MediaKind,
    pub src: Option<String>,
    pub autoplay: bool,
    pub controls: bool,
    pub muted: bool,
    pub looped: bool,
    pub tracks: Vec<TrackInfo>,
    /// `param` name/value pairs of an `object`
    pub params: Vec<(String, String)>,
}

impl MediaInfo {
    pub fn has_track(&self, kind: &str) -> bool {
        self.tracks.iter().any(|t| t.kind == kind)
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Media {
    pub media: Vec<MediaInfo>,
}

impl Media {
    pub fn collect(tree: &Tree) -> Self {
        let media = tree
            .elements()
            .filter_map(|node| {
                let kind = match node.tag.as_str() {
                    "audio" => MediaKind::Audio,
                    "video" => MediaKind::Video,
                    "embed" => MediaKind::Embed,
                    "object" => MediaKind::Object,
                    _ => return None,
                };
                let src = node
                    .attr("src")
                    .or_else(|| node.attr("data"))
                    .or_else(|| {
                        tree.find_descendant(node.id, |d| d.tag == "source")
                            .and_then(|s| tree.element(s).attr("src"))
                    })
                    .map(str::to_string);
                let tracks = tree
                    .descendants(node.id)
                    .map(|d| tree.element(d))
                    .filter(|d| d.tag == "track")
                    .map(|track| TrackInfo {
                        element: track.id,
                        kind: track.attrs.get_lower("kind").unwrap_or_else(|| "subtitles".to_string()),
                        src_lang: track.attr("srclang").map(str::to_string),
                        label: track.attr("label").map(str::to_string),
                    })
                    .collect();
                let params = node
                    .child_elements()
                    .map(|c| tree.element(c))
                    .filter(|c| c.tag == "param")
                    .filter_map(|p| Some((p.attr("name")?.to_string(), p.attr("value").unwrap_or_default().to_string())))
                    .collect();
                Some(MediaInfo {
                    element: node.id,
                    kind,
                    src,
                    autoplay: node.has_attr("autoplay"),
                    controls: node.has_attr("controls"),
                    muted: node.has_attr("muted"),
                    looped: node.has_attr("loop"),
                    tracks,
                    params,
                })
            })
            .collect();
        Self { media }
    }
}
