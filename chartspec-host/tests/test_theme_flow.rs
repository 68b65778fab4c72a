use chartspec_core::theme::{Color, Palette};
use chartspec_host::host::{Host, Viewer};
use chartspec_host::options::ViewerOptions;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct RecordingViewer {
    options_updates: Vec<ViewerOptions>,
    layout_renders: Vec<ViewerOptions>,
    sidebar_calls: Vec<(bool, bool)>,
    resize_count: usize,
}

impl Viewer for RecordingViewer {
    fn update_viewer_options(&mut self, options: &ViewerOptions) {
        self.options_updates.push(options.clone());
    }

    fn render_same_layout(&mut self, options: &ViewerOptions) {
        self.layout_renders.push(options.clone());
    }

    fn set_sidebar(&mut self, closed: bool, hide: bool) {
        self.sidebar_calls.push((closed, hide));
    }

    fn resize(&mut self) {
        self.resize_count += 1;
    }
}

fn make_host() -> (Host<RecordingViewer>, Rc<RefCell<Vec<Palette>>>) {
    let _ = env_logger::builder().is_test(true).try_init();
    let palettes = Rc::new(RefCell::new(Vec::new()));
    let recorded = Rc::clone(&palettes);
    let mut host =
        Host::new().on_chrome_theme(move |palette| recorded.borrow_mut().push(palette));
    host.mount(RecordingViewer::default());
    (host, palettes)
}

#[test]
fn test_theme_change_pushes_options_and_rerenders() {
    let (mut host, palettes) = make_host();

    host.change_theme(true);

    let viewer = host.viewer().unwrap();
    assert_eq!(viewer.options_updates.len(), 1);
    assert_eq!(viewer.options_updates[0].colors.axis_text, Color::WHITE);
    assert_eq!(viewer.layout_renders.len(), 1);
    assert_eq!(*palettes.borrow(), vec![Palette::DarkTheme]);
    assert_eq!(host.state().dark_theme, Some(true));
}

#[test]
fn test_setting_current_theme_never_rerenders_viewer() {
    let (mut host, palettes) = make_host();

    host.change_theme(true);
    host.change_theme(true);

    let viewer = host.viewer().unwrap();
    assert_eq!(viewer.options_updates.len(), 1);
    assert_eq!(viewer.layout_renders.len(), 1);
    // Chrome palette still reloads on the no-op
    assert_eq!(
        *palettes.borrow(),
        vec![Palette::DarkTheme, Palette::DarkTheme]
    );
}

#[test]
fn test_theme_toggle_back_updates_again() {
    let (mut host, _palettes) = make_host();

    host.change_theme(true);
    host.change_theme(false);

    let viewer = host.viewer().unwrap();
    assert_eq!(viewer.options_updates.len(), 2);
    assert_eq!(viewer.options_updates[1].colors.axis_line, Color::BLACK);
    assert_eq!(host.viewer_options().colors.axis_line, Color::BLACK);
}

#[test]
fn test_chromeless_drives_sidebar_and_resize() {
    let (mut host, _palettes) = make_host();

    host.set_chromeless(true);
    host.set_chromeless(false);

    let viewer = host.viewer().unwrap();
    assert_eq!(viewer.sidebar_calls, vec![(true, false), (false, true)]);
    assert_eq!(viewer.resize_count, 2);
}

#[test]
fn test_unmounted_host_keeps_options_locally() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut host: Host<RecordingViewer> = Host::new();
    host.change_theme(true);
    host.set_chromeless(true);
    assert_eq!(host.viewer_options().colors.axis_text, Color::WHITE);
    assert!(host.viewer().is_none());
    assert!(host.state().chromeless);

    // A viewer mounted afterwards sees no replayed effects
    host.mount(RecordingViewer::default());
    let viewer = host.viewer().unwrap();
    assert!(viewer.options_updates.is_empty());
    assert!(viewer.sidebar_calls.is_empty());
    assert_eq!(viewer.resize_count, 0);
}

#[test]
fn test_view_change_relay() {
    let seen = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&seen);
    let mut host: Host<RecordingViewer> =
        Host::new().on_view_change(move || *counter.borrow_mut() += 1);
    host.notify_view_change();
    host.notify_view_change();
    assert_eq!(*seen.borrow(), 2);
}
