use crate::options::ViewerOptions;
use crate::state::{reduce, Effect, HostEvent, HostState};
use chartspec_core::theme::Palette;

/// Contract with the active rendering surface: push a complete options
/// object and the viewer re-renders using the existing layout.
pub trait Viewer {
    fn update_viewer_options(&mut self, options: &ViewerOptions);

    fn render_same_layout(&mut self, options: &ViewerOptions);

    fn set_sidebar(&mut self, closed: bool, hide: bool);

    fn resize(&mut self);
}

type ViewChangeHandler = Box<dyn FnMut()>;
type ChromeThemeHandler = Box<dyn FnMut(Palette)>;

/// Thin wrapper owning the single active viewer instance. All mutations
/// originate from serialized callbacks; there is no interior mutability.
pub struct Host<V: Viewer> {
    state: HostState,
    viewer_options: ViewerOptions,
    viewer: Option<V>,
    on_view_change: Option<ViewChangeHandler>,
    on_chrome_theme: Option<ChromeThemeHandler>,
}

impl<V: Viewer> Default for Host<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Viewer> Host<V> {
    pub fn new() -> Self {
        Self {
            state: HostState::default(),
            viewer_options: ViewerOptions::default(),
            viewer: None,
            on_view_change: None,
            on_chrome_theme: None,
        }
    }

    pub fn on_view_change(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_view_change = Some(Box::new(handler));
        self
    }

    pub fn on_chrome_theme(mut self, handler: impl FnMut(Palette) + 'static) -> Self {
        self.on_chrome_theme = Some(Box::new(handler));
        self
    }

    /// Hand over the viewer instance once it becomes available.
    pub fn mount(&mut self, viewer: V) {
        self.viewer = Some(viewer);
    }

    pub fn viewer(&self) -> Option<&V> {
        self.viewer.as_ref()
    }

    pub fn viewer_mut(&mut self) -> Option<&mut V> {
        self.viewer.as_mut()
    }

    pub fn state(&self) -> &HostState {
        &self.state
    }

    pub fn viewer_options(&self) -> &ViewerOptions {
        &self.viewer_options
    }

    pub fn change_theme(&mut self, dark_theme: bool) {
        self.dispatch(HostEvent::SetTheme(dark_theme));
    }

    pub fn set_chromeless(&mut self, chromeless: bool) {
        self.dispatch(HostEvent::SetChromeless(chromeless));
    }

    /// Relay a view/signal change from the viewer to the embedding caller
    /// without interpreting it.
    pub fn notify_view_change(&mut self) {
        if let Some(handler) = &mut self.on_view_change {
            handler();
        }
    }

    fn dispatch(&mut self, event: HostEvent) {
        let (state, effects) = reduce(&self.state, event);
        self.state = state;
        for effect in effects {
            self.apply(effect);
        }
    }

    fn apply(&mut self, effect: Effect) {
        match effect {
            Effect::UpdateViewerOptions(options) => {
                self.viewer_options = options;
                match &mut self.viewer {
                    Some(viewer) => viewer.update_viewer_options(&self.viewer_options),
                    None => log::debug!("no viewer mounted; options update kept locally"),
                }
            }
            Effect::RenderSameLayout => match &mut self.viewer {
                Some(viewer) => viewer.render_same_layout(&self.viewer_options),
                None => log::debug!("no viewer mounted; dropping re-render"),
            },
            Effect::LoadChromeTheme(palette) => {
                if let Some(handler) = &mut self.on_chrome_theme {
                    handler(palette);
                }
            }
            Effect::SetSidebar { closed, hide } => match &mut self.viewer {
                Some(viewer) => viewer.set_sidebar(closed, hide),
                None => log::debug!("no viewer mounted; dropping sidebar change"),
            },
            Effect::Resize => match &mut self.viewer {
                Some(viewer) => viewer.resize(),
                None => log::debug!("no viewer mounted; dropping resize"),
            },
        }
    }
}
