//! Test utilities for folio-tui view and navigation tests.

use folio_core::{sample_document, SettingsDocument, Variant};

use crate::app::App;
use crate::headless;
use crate::theme::{BorderSet, IconMode, IconSet};

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 100;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 32;

/// Create a test app with the sample document and default settings.
/// Glyphs are pinned to Unicode so assertions do not depend on the
/// environment.
pub fn create_test_app() -> App {
    create_test_app_with(SettingsDocument::default())
}

/// Create a test app with specific initial settings.
pub fn create_test_app_with(settings: SettingsDocument) -> App {
    let mut app = App::new(sample_document(), settings);
    app.icons = IconSet::new(IconMode::Unicode);
    app.borders = BorderSet::new(IconMode::Unicode);
    app
}

/// Create a test app with an initial variant.
pub fn create_test_app_with_variant(variant: Variant) -> App {
    create_test_app_with(SettingsDocument {
        variant,
        ..SettingsDocument::default()
    })
}

/// Render the app at the default test size and return the screen text.
pub fn render_app_to_string(app: &mut App) -> String {
    headless::render_to_string(app, TEST_WIDTH, TEST_HEIGHT).expect("render failed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert!(!app.should_quit);
        assert_eq!(app.document.profile.name, "Rowan Hale");
    }

    #[test]
    fn test_render_app_to_string_has_both_panels() {
        let mut app = create_test_app();
        let screen = render_app_to_string(&mut app);
        assert!(screen.contains("document"));
        assert!(screen.contains("portfolio"));
    }
}
