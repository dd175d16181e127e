//! Global registry installation from config.
//!
//! Kept in its own test binary so no other test touches the global first.

use sift::SiftConfig;
use sift::host::install_registry;
use sift_engines::Category;
use sift_engines::registry::global;

#[test]
fn install_registry_publishes_once() {
    let config = SiftConfig::default();
    let installed = install_registry(&config).expect("first install");
    assert!(std::ptr::eq(installed, global()));
    assert_eq!(global().in_category(Category::Video).len(), 1);

    let err = install_registry(&config).unwrap_err();
    assert!(err.to_string().contains("already installed"));
}
