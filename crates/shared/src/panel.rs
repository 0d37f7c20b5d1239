//! Markup fragments produced by the renderers and turned into DOM by the web app.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    Primary,
    Ghost,
}

/// A button whose only effect is a transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct StubAction {
    pub icon: &'static str,
    pub label: String,
    pub message: String,
    pub style: ActionStyle,
}

impl StubAction {
    pub fn new(icon: &'static str, label: &str, message: &str) -> Self {
        StubAction {
            icon,
            label: label.to_string(),
            message: message.to_string(),
            style: ActionStyle::Primary,
        }
    }

    pub fn ghost(mut self) -> Self {
        self.style = ActionStyle::Ghost;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Card {
    pub title: String,
    pub subtitle: Option<String>,
    pub badge: Option<String>,
    pub chips: Vec<String>,
    pub actions: Vec<StubAction>,
}

impl Card {
    pub fn new(title: impl Into<String>) -> Self {
        Card {
            title: title.into(),
            ..Card::default()
        }
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    pub fn chip(mut self, chip: impl Into<String>) -> Self {
        self.chips.push(chip.into());
        self
    }

    pub fn chips<I, S>(mut self, chips: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chips.extend(chips.into_iter().map(Into::into));
        self
    }

    pub fn action(mut self, action: StubAction) -> Self {
        self.actions.push(action);
        self
    }
}

/// Shown instead of a data list when its fixture could not be loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorCard {
    pub title: String,
    pub detail: String,
    pub hint: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    KeyValue { key: String, value: String },
    Card(Card),
    Divider,
    List(Vec<Card>),
    Note(String),
    Error(ErrorCard),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub heading: String,
    pub blocks: Vec<Block>,
}

impl Panel {
    pub fn new(heading: impl Into<String>) -> Self {
        Panel {
            heading: heading.into(),
            blocks: Vec::new(),
        }
    }

    pub fn push(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn error(&self) -> Option<&ErrorCard> {
        self.blocks.iter().find_map(|b| match b {
            Block::Error(e) => Some(e),
            _ => None,
        })
    }

    /// Cards of the data list, if the panel has one.
    pub fn list(&self) -> &[Card] {
        self.blocks
            .iter()
            .find_map(|b| match b {
                Block::List(cards) => Some(cards.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Every stub action reachable from this panel.
    pub fn actions(&self) -> impl Iterator<Item = &StubAction> {
        self.blocks.iter().flat_map(|b| {
            let cards: &[Card] = match b {
                Block::Card(c) => std::slice::from_ref(c),
                Block::List(cards) => cards,
                _ => &[],
            };
            cards.iter().flat_map(|c| c.actions.iter())
        })
    }
}
