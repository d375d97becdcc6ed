use accord_aria::Role;
use serde::Serialize;

use crate::model::ElementFacts;
use crate::tree::{ElementId, Tree};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageInfo {
    pub element: ElementId,
    /// Last path segment of `src`, without query or fragment
    pub file_name: Option<String>,
    pub alt: Option<String>,
    pub is_svg: bool,
    /// Role `presentation`/`none`, or an empty `alt`
    pub is_decorative: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapInfo {
    pub element: ElementId,
    pub name: Option<String>,
    pub areas: Vec<ElementId>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Images {
    pub images: Vec<ImageInfo>,
    pub maps: Vec<MapInfo>,
}

impl Images {
    pub fn collect(tree: &Tree, facts: &[ElementFacts]) -> Self {
        let mut images = Vec::new();
        let mut maps = Vec::new();
        for f in facts {
            let node = tree.element(f.id);
            let is_svg = node.tag == "svg";
            let is_image = node.tag == "img"
                || is_svg
                || node.input_type().as_deref() == Some("image")
                || f.role.explicit == Some(Role::Img);
            if is_image {
                images.push(ImageInfo {
                    element: f.id,
                    file_name: node.attr("src").and_then(file_name),
                    alt: node.attr("alt").map(str::to_string),
                    is_svg,
                    is_decorative: f.role.role.is_presentational() || node.attr("alt") == Some(""),
                });
            }
            if node.tag == "map" {
                maps.push(MapInfo {
                    element: f.id,
                    name: node.attr("name").map(str::to_string),
                    areas: tree
                        .descendants(f.id)
                        .filter(|&d| tree.element(d).tag == "area")
                        .collect(),
                });
            }
        }
        Self { images, maps }
    }

    /// The `map` an image refers to through `usemap`
    pub fn map_for<'a>(&'a self, tree: &Tree, image: ElementId) -> Option<&'a MapInfo> {
        let target = tree.element(image).attr("usemap")?.trim().trim_start_matches('#');
        self.maps.iter().find(|m| m.name.as_deref() == Some(target))
    }
}

fn file_name(src: &str) -> Option<String> {
    let path = src.split(['?', '#']).next().unwrap_or_default();
    let name = path.rsplit('/').next().unwrap_or_default().trim();
    (!name.is_empty()).then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/img/logo.png?v=2").as_deref(), Some("logo.png"));
        assert_eq!(file_name("photo.jpg#frag").as_deref(), Some("photo.jpg"));
        assert_eq!(file_name("https://example.com/dir/"), None);
    }
}
