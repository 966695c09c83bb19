use crate::core::formatters::ItemBlock;
use crate::views::ContainerTemplate;
use askama::Template;

/// Shown when a feed has nothing to list
pub const EMPTY_PLACEHOLDER: &str = "No data available yet.";

/// What a container currently shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerContent {
    Blank,
    Placeholder(String),
    Items(Vec<ItemBlock>),
}

/// A page region whose content is always replaced wholesale
#[derive(Debug, Clone)]
pub struct Container {
    id: String,
    content: ContainerContent,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: ContainerContent::Blank,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &ContainerContent {
        &self.content
    }

    pub fn clear(&mut self) {
        self.content = ContainerContent::Blank;
    }

    /// Replace everything with a single line of text
    pub fn set_placeholder(&mut self, text: impl Into<String>) {
        self.content = ContainerContent::Placeholder(text.into());
    }

    /// Append one item block after the existing ones
    pub fn append(&mut self, block: ItemBlock) {
        match &mut self.content {
            ContainerContent::Items(blocks) => blocks.push(block),
            _ => self.content = ContainerContent::Items(vec![block]),
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match &self.content {
            ContainerContent::Placeholder(text) => Some(text),
            _ => None,
        }
    }

    pub fn blocks(&self) -> &[ItemBlock] {
        match &self.content {
            ContainerContent::Items(blocks) => blocks,
            _ => &[],
        }
    }

    /// Inner markup of the container
    pub fn to_html(&self) -> Result<String, askama::Error> {
        let blocks = self
            .blocks()
            .iter()
            .map(ItemBlock::to_html)
            .collect::<Result<Vec<_>, _>>()?;

        ContainerTemplate {
            show_placeholder: self.placeholder().is_some(),
            placeholder: self.placeholder().unwrap_or(""),
            blocks,
        }
        .render()
    }
}

/// Replace the container's content with one block per item
///
/// An absent or empty sequence leaves only [`EMPTY_PLACEHOLDER`].
pub fn render<T, F>(container: &mut Container, items: Option<&[T]>, formatter: F)
where
    F: Fn(&T) -> ItemBlock,
{
    container.clear();

    let items = match items {
        Some(items) if !items.is_empty() => items,
        _ => {
            container.set_placeholder(EMPTY_PLACEHOLDER);
            return;
        }
    };

    for item in items {
        container.append(formatter(item));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(n: &u32) -> ItemBlock {
        ItemBlock::new(format!("item {}", n), "")
    }

    #[test]
    fn test_render_preserves_order() {
        let mut container = Container::new("predictions");
        render(&mut container, Some(&[3u32, 1, 2][..]), numbered);

        let titles: Vec<_> = container.blocks().iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["item 3", "item 1", "item 2"]);
        assert!(container.placeholder().is_none());
    }

    #[test]
    fn test_render_empty_and_absent() {
        let mut container = Container::new("scores");

        render::<u32, _>(&mut container, Some(&[][..]), numbered);
        assert_eq!(container.placeholder(), Some(EMPTY_PLACEHOLDER));
        assert!(container.blocks().is_empty());

        render::<u32, _>(&mut container, None, numbered);
        assert_eq!(container.placeholder(), Some(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn test_render_replaces_previous_content() {
        let mut container = Container::new("scores");
        render(&mut container, Some(&[1u32, 2][..]), numbered);
        render(&mut container, Some(&[9u32][..]), numbered);

        assert_eq!(container.blocks().len(), 1);
        assert_eq!(container.blocks()[0].title, "item 9");

        container.clear();
        assert_eq!(container.content(), &ContainerContent::Blank);
        assert_eq!(container.to_html().unwrap(), "");
    }

    #[test]
    fn test_container_html() {
        let mut container = Container::new("predictions");
        render(&mut container, Some(&[1u32, 2][..]), numbered);

        let html = container.to_html().unwrap();
        assert_eq!(html.matches("<div class=\"item\">").count(), 2);
        assert!(html.find("item 1").unwrap() < html.find("item 2").unwrap());

        container.set_placeholder(EMPTY_PLACEHOLDER);
        assert_eq!(container.to_html().unwrap(), "<p>No data available yet.</p>");
    }
}
