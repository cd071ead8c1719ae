use crate::filter::filter;
use flagdeck_domain::card::FlagCard;
use flagdeck_domain::config::FlagHostConfig;
use flagdeck_domain::directory::CodeDirectory;
use tracing::trace;

/// Output surface of the renderer: the grid that holds flag cards.
pub trait CardContainer {
    /// Removes every card.
    fn clear(&mut self);

    /// Appends one card after the existing ones.
    fn append(&mut self, card: FlagCard);
}

impl CardContainer for Vec<FlagCard> {
    fn clear(&mut self) {
        Vec::clear(self);
    }

    fn append(&mut self, card: FlagCard) {
        self.push(card);
    }
}

/// Replaces the content of `container` with the cards of `directory` matching `term`.
///
/// Returns the number of cards appended. Zero matches leaves the container empty.
pub fn render<C>(container: &mut C, directory: &CodeDirectory, term: &str, host: &FlagHostConfig) -> usize
where
    C: CardContainer + ?Sized,
{
    container.clear();

    let mut rendered = 0;
    for entry in filter(directory, term) {
        container.append(FlagCard::from_entry(entry, host));
        rendered += 1;
    }

    trace!(term, rendered, total = directory.len(), "Flags rendered");
    rendered
}
