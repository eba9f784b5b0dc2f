use crate::app::infrastructure::presentation::{LiveRegion, Presentation};

/// Id of the shared announcement live region.
pub const ANNOUNCEMENT_REGION_ID: &str = "accessibility-announcement";

/// Sends short messages to assistive technology through one reusable live region.
///
/// The region is created on the first announcement and reused afterwards, so
/// rapid announcements replace each other instead of stacking up.
#[derive(Debug, Clone, Copy, Default)]
pub struct Announcer;

impl Announcer {
    pub fn announce<P: Presentation + ?Sized>(&self, page: &mut P, message: &str) {
        tracing::debug!(text = message, "announce");
        if page.write_live_region(ANNOUNCEMENT_REGION_ID, message) {
            return;
        }
        let mut region = LiveRegion::hidden_polite(ANNOUNCEMENT_REGION_ID);
        region.text = message.to_string();
        page.append_live_region(region);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::presentation::Page;

    #[test]
    fn test_region_created_lazily() {
        let page = Page::with_standard_controls();
        assert!(page.live_regions().is_empty());
    }

    #[test]
    fn test_single_region_reused() {
        let announcer = Announcer::default();
        let mut page = Page::with_standard_controls();

        announcer.announce(&mut page, "primeiro");
        announcer.announce(&mut page, "segundo");
        announcer.announce(&mut page, "terceiro");

        assert_eq!(page.live_regions().len(), 1);
        let region = &page.live_regions()[0];
        assert_eq!(region.id, ANNOUNCEMENT_REGION_ID);
        assert_eq!(region.text, "terceiro");
        assert_eq!(page.spoken(), ["primeiro", "segundo", "terceiro"]);
    }

    #[test]
    fn test_region_is_hidden_polite_and_atomic() {
        let announcer = Announcer::default();
        let mut page = Page::empty();
        announcer.announce(&mut page, "olá");

        let region = page.live_region(ANNOUNCEMENT_REGION_ID).unwrap();
        assert!(region.polite);
        assert!(region.atomic);
        assert!(region.visually_hidden);
    }

    #[test]
    fn test_existing_region_adopted() {
        let mut page = Page::empty();
        page.append_live_region(LiveRegion::hidden_polite(ANNOUNCEMENT_REGION_ID));

        Announcer::default().announce(&mut page, "reuso");
        assert_eq!(page.live_regions().len(), 1);
        assert_eq!(page.live_regions()[0].text, "reuso");
    }
}
