//! Page regions and day-section collapsing
//!
//! A [`Region`] is an ordered list of sibling nodes, the in-memory stand-in
//! for a page container. Rendered itinerary markup is split into nodes when
//! it is inserted; day headings can then be wired so that clicking one
//! toggles the nodes between it and the next day heading.

use crate::domain::markup::{DAY_TITLE_CLASS, DAY_TITLE_OPEN, LINE_BREAK};
use regex::Regex;
use std::sync::OnceLock;

/// Matches the element vocabulary produced by the itinerary renderer
fn element_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"<h1>(?P<h1>.*?)</h1>|<h2>(?P<h2>.*?)</h2>|<h3 class='day-title'>(?P<day>.*?)</h3>|<br/>")
            .unwrap()
    })
}

fn tag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Identifier of a node; never reused within a region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

/// What a node is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// `<h1>` or `<h2>`
    Heading { level: u8 },
    /// Day heading (`<h3 class='day-title'>`)
    DayTitle,
    /// `<br/>`
    LineBreak,
    /// Bare text between elements; not an element itself
    Text,
    /// Block inserted by layout (gallery, hotels, error)
    Block { id: String },
}

/// A single sibling inside a region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Inner markup (text for [`NodeKind::Text`])
    pub html: String,
    pub hidden: bool,
}

impl Node {
    /// Whether this node is an element (text runs are not)
    pub fn is_element(&self) -> bool {
        !matches!(self.kind, NodeKind::Text)
    }

    pub fn is_day_title(&self) -> bool {
        matches!(self.kind, NodeKind::DayTitle)
    }

    /// Text content with all tags stripped
    pub fn text_content(&self) -> String {
        tag_regex().replace_all(&self.html, "").into_owned()
    }

    /// Serialize the node. `day` is the ordinal of the day section the node
    /// belongs to, written as `data-day` so the export script can toggle it.
    fn to_html(&self, day: Option<usize>) -> String {
        let data = day.map(|d| format!(" data-day=\"{d}\"")).unwrap_or_default();
        let class = if self.hidden { " class=\"hidden\"" } else { "" };

        match &self.kind {
            NodeKind::Heading { level } => {
                format!("<h{level}{class}{data}>{}</h{level}>", self.html)
            }
            // Day headings end every section, so they are never members
            NodeKind::DayTitle => {
                if self.hidden {
                    format!("<h3 class='{DAY_TITLE_CLASS} hidden'>{}</h3>", self.html)
                } else {
                    format!("{DAY_TITLE_OPEN}{}</h3>", self.html)
                }
            }
            NodeKind::LineBreak => {
                if self.hidden || day.is_some() {
                    format!("<br{class}{data}/>")
                } else {
                    LINE_BREAK.to_string()
                }
            }
            NodeKind::Text => {
                if self.hidden || day.is_some() {
                    format!("<span{class}{data}>{}</span>", self.html)
                } else {
                    self.html.clone()
                }
            }
            NodeKind::Block { id } => {
                format!("<section id=\"{id}\"{class}{data}>{}</section>", self.html)
            }
        }
    }
}

/// Click handler registered on a day heading.
///
/// Handlers are kept in the order of their headings, so a handler's index is
/// the ordinal of its day section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayToggle {
    pub heading: NodeId,
    /// Siblings collected when the handler was wired
    pub members: Vec<NodeId>,
}

/// Ordered sibling nodes plus the handlers wired onto them
#[derive(Debug, Default)]
pub struct Region {
    nodes: Vec<Node>,
    handlers: Vec<DayToggle>,
    next_id: u64,
}

impl Region {
    pub fn new() -> Self {
        Region::default()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn handlers(&self) -> &[DayToggle] {
        &self.handlers
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Position of a node among its siblings
    pub fn position(&self, id: NodeId) -> Option<usize> {
        self.nodes.iter().position(|n| n.id == id)
    }

    pub fn is_hidden(&self, id: NodeId) -> Option<bool> {
        self.get(id).map(|n| n.hidden)
    }

    /// Set a node's hidden flag directly. Returns `false` for unknown ids.
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> bool {
        match self.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.hidden = hidden;
                true
            }
            None => false,
        }
    }

    /// Ids of all day headings in order
    pub fn day_titles(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.is_day_title())
            .map(|n| n.id)
            .collect()
    }

    /// Element children (text runs excluded)
    pub fn elements(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_element())
    }

    /// Remove all nodes and every handler wired onto them
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.handlers.clear();
    }

    /// Replace the region's content with parsed markup.
    ///
    /// Handlers from a previous insertion are dropped together with their
    /// nodes.
    pub fn set_markup(&mut self, markup: &str) {
        self.clear();

        let mut last = 0;
        for caps in element_regex().captures_iter(markup) {
            let Some(whole) = caps.get(0) else { continue };

            if whole.start() > last {
                self.push_node(NodeKind::Text, markup[last..whole.start()].to_string());
            }

            if let Some(inner) = caps.name("h1") {
                self.push_node(NodeKind::Heading { level: 1 }, inner.as_str().to_string());
            } else if let Some(inner) = caps.name("h2") {
                self.push_node(NodeKind::Heading { level: 2 }, inner.as_str().to_string());
            } else if let Some(inner) = caps.name("day") {
                self.push_node(NodeKind::DayTitle, inner.as_str().to_string());
            } else {
                self.push_node(NodeKind::LineBreak, String::new());
            }

            last = whole.end();
        }

        if last < markup.len() {
            self.push_node(NodeKind::Text, markup[last..].to_string());
        }
    }

    fn new_node(&mut self, kind: NodeKind, html: String) -> Node {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        Node {
            id,
            kind,
            html,
            hidden: false,
        }
    }

    fn push_node(&mut self, kind: NodeKind, html: String) -> NodeId {
        let node = self.new_node(kind, html);
        let id = node.id;
        self.nodes.push(node);
        id
    }

    /// Insert a block at `index` (clamped to the end)
    pub fn insert_block(&mut self, index: usize, block_id: &str, html: String) -> NodeId {
        let node = self.new_node(
            NodeKind::Block {
                id: block_id.to_string(),
            },
            html,
        );
        let id = node.id;
        let index = index.min(self.nodes.len());
        self.nodes.insert(index, node);
        id
    }

    /// Append a block after all other nodes
    pub fn append_block(&mut self, block_id: &str, html: String) -> NodeId {
        let len = self.nodes.len();
        self.insert_block(len, block_id, html)
    }

    /// Find an inserted block by its block id
    pub fn block(&self, block_id: &str) -> Option<&Node> {
        self.nodes
            .iter()
            .find(|n| matches!(&n.kind, NodeKind::Block { id } if id == block_id))
    }

    /// Wire click-to-collapse handlers onto every day heading.
    ///
    /// Each heading collects the siblings that follow it up to the next day
    /// heading or the end of the region. Wiring the same heading again
    /// replaces its handler. Returns the number of wired headings.
    pub fn wire_day_sections(&mut self) -> usize {
        let mut wired = 0;

        for (index, node) in self.nodes.iter().enumerate() {
            if !node.is_day_title() {
                continue;
            }

            let members: Vec<NodeId> = self.nodes[index + 1..]
                .iter()
                .take_while(|sibling| !sibling.is_day_title())
                .map(|sibling| sibling.id)
                .collect();

            let toggle = DayToggle {
                heading: node.id,
                members,
            };

            match self.handlers.iter_mut().find(|h| h.heading == node.id) {
                Some(existing) => *existing = toggle,
                None => self.handlers.push(toggle),
            }
            wired += 1;
        }

        tracing::debug!(headings = wired, "wired day sections");
        wired
    }

    /// Click a node. Returns `false` when no handler is wired onto it.
    pub fn click(&mut self, id: NodeId) -> bool {
        let Some(handler) = self.handlers.iter().find(|h| h.heading == id) else {
            return false;
        };

        for member in &handler.members {
            if let Some(node) = self.nodes.iter_mut().find(|n| n.id == *member) {
                node.hidden = !node.hidden;
            }
        }
        true
    }

    /// Ordinal of the wired day section a node belongs to
    pub fn section_of(&self, id: NodeId) -> Option<usize> {
        self.handlers
            .iter()
            .position(|h| h.members.contains(&id))
    }

    /// Serialize the region back to markup.
    ///
    /// Members of wired day sections carry `data-day` with the ordinal of
    /// their section; an unwired region serializes to the markup it was
    /// built from.
    pub fn to_html(&self) -> String {
        self.nodes
            .iter()
            .map(|node| node.to_html(self.section_of(node.id)))
            .collect()
    }
}
