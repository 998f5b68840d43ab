//! Scroll-driven page effects: header style, active nav link, scroll-to-top.

use crate::config::ScrollConfig;

/// Where a section starts on the rendered page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionAnchor {
    pub id: String,
    /// First page row of the section
    pub top: u16,
}

impl SectionAnchor {
    pub fn new(id: impl Into<String>, top: u16) -> Self {
        Self { id: id.into(), top }
    }
}

/// Sticky header appearance, recomputed on (debounced) scroll
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// Opaque background once the page has scrolled a little
    pub solid: bool,
    /// Slid out of view while scrolling down
    pub hidden: bool,
    last_offset: u16,
}

impl HeaderState {
    pub fn update(&mut self, offset: u16, config: &ScrollConfig) {
        self.solid = offset > config.header_solid_after;
        self.hidden = offset > self.last_offset && offset > config.header_hide_after;
        self.last_offset = offset;
    }
}

/// The section the nav should highlight: the last one whose top, less the
/// header and nav lead, has been scrolled past.
pub fn active_section<'a>(
    anchors: &'a [SectionAnchor],
    offset: u16,
    header_height: u16,
    config: &ScrollConfig,
) -> Option<&'a str> {
    let lead = header_height.saturating_add(config.nav_offset);
    anchors
        .iter()
        .rev()
        .find(|anchor| offset >= anchor.top.saturating_sub(lead))
        .map(|anchor| anchor.id.as_str())
}

/// Scroll offset that brings `anchor` just below the header.
pub fn scroll_target(anchor: &SectionAnchor, header_height: u16, config: &ScrollConfig) -> u16 {
    anchor
        .top
        .saturating_sub(header_height.saturating_add(config.section_gap))
}

pub fn scroll_top_visible(offset: u16, config: &ScrollConfig) -> bool {
    offset > config.scroll_top_after
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchors() -> Vec<SectionAnchor> {
        vec![
            SectionAnchor::new("home", 0),
            SectionAnchor::new("services", 20),
            SectionAnchor::new("pricing", 50),
        ]
    }

    #[test]
    fn header_turns_solid_past_threshold() {
        let config = ScrollConfig::default();
        let mut header = HeaderState::default();

        header.update(config.header_solid_after, &config);
        assert!(!header.solid);
        header.update(config.header_solid_after + 1, &config);
        assert!(header.solid);
    }

    #[test]
    fn header_hides_only_when_scrolling_down_far_enough() {
        let config = ScrollConfig::default();
        let mut header = HeaderState::default();

        // Scrolling down but still above the hide threshold
        header.update(config.header_hide_after, &config);
        assert!(!header.hidden);

        header.update(config.header_hide_after + 5, &config);
        assert!(header.hidden);

        // Scrolling back up reveals it again
        header.update(config.header_hide_after + 2, &config);
        assert!(!header.hidden);
    }

    #[test]
    fn active_section_picks_last_section_scrolled_past() {
        let config = ScrollConfig::default();
        let anchors = anchors();
        let header = 2;
        let lead = header + config.nav_offset;

        assert_eq!(active_section(&anchors, 0, header, &config), Some("home"));
        assert_eq!(
            active_section(&anchors, 20 - lead - 1, header, &config),
            Some("home")
        );
        assert_eq!(
            active_section(&anchors, 20 - lead, header, &config),
            Some("services")
        );
        assert_eq!(
            active_section(&anchors, 200, header, &config),
            Some("pricing")
        );
    }

    #[test]
    fn active_section_empty_without_anchors() {
        assert_eq!(active_section(&[], 10, 2, &ScrollConfig::default()), None);
    }

    #[test]
    fn scroll_target_leaves_room_for_header_and_clamps() {
        let config = ScrollConfig::default();
        let pricing = SectionAnchor::new("pricing", 50);
        assert_eq!(
            scroll_target(&pricing, 2, &config),
            50 - 2 - config.section_gap
        );

        let home = SectionAnchor::new("home", 0);
        assert_eq!(scroll_target(&home, 2, &config), 0);
    }

    #[test]
    fn scroll_top_button_threshold() {
        let config = ScrollConfig::default();
        assert!(!scroll_top_visible(config.scroll_top_after, &config));
        assert!(scroll_top_visible(config.scroll_top_after + 1, &config));
    }
}
