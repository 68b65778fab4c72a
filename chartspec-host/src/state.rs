use crate::options::ViewerOptions;
use chartspec_core::theme::Palette;

/// Host flags driving conditional re-render. `dark_theme` starts unset;
/// the first explicit theme assignment therefore always counts as a change.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostState {
    pub chromeless: bool,
    pub dark_theme: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    SetTheme(bool),
    SetChromeless(bool),
}

/// Side effects the host must carry out after a state transition. Kept as
/// data so the update/no-op distinction is testable without a viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    UpdateViewerOptions(ViewerOptions),
    RenderSameLayout,
    LoadChromeTheme(Palette),
    SetSidebar { closed: bool, hide: bool },
    Resize,
}

/// Pure reducer mapping (state, event) to (new state, effects).
///
/// On a theme change the viewer is only touched when the theme actually
/// differs from the recorded one, while the chrome palette is reloaded
/// either way.
pub fn reduce(state: &HostState, event: HostEvent) -> (HostState, Vec<Effect>) {
    match event {
        HostEvent::SetTheme(dark_theme) => {
            let mut effects = Vec::new();
            if state.dark_theme != Some(dark_theme) {
                effects.push(Effect::UpdateViewerOptions(ViewerOptions::from_dark_theme(
                    Some(dark_theme),
                )));
                effects.push(Effect::RenderSameLayout);
            } else {
                log::debug!("theme already {dark_theme:?}; skipping viewer update");
            }
            effects.push(Effect::LoadChromeTheme(Palette::from_dark_theme(dark_theme)));
            (
                HostState {
                    dark_theme: Some(dark_theme),
                    ..*state
                },
                effects,
            )
        }
        HostEvent::SetChromeless(chromeless) => (
            HostState {
                chromeless,
                ..*state
            },
            vec![
                Effect::SetSidebar {
                    closed: chromeless,
                    hide: !chromeless,
                },
                Effect::Resize,
            ],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartspec_core::theme::Color;

    #[test]
    fn test_first_theme_assignment_updates_viewer() {
        let (state, effects) = reduce(&HostState::default(), HostEvent::SetTheme(false));
        assert_eq!(state.dark_theme, Some(false));
        // None != Some(false): the viewer is updated once on initialization
        assert!(matches!(effects[0], Effect::UpdateViewerOptions(_)));
        assert_eq!(effects[1], Effect::RenderSameLayout);
        assert_eq!(effects[2], Effect::LoadChromeTheme(Palette::Default));
    }

    #[test]
    fn test_noop_theme_keeps_chrome_update() {
        let state = HostState {
            chromeless: false,
            dark_theme: Some(true),
        };
        let (next, effects) = reduce(&state, HostEvent::SetTheme(true));
        assert_eq!(next, state);
        assert_eq!(effects, vec![Effect::LoadChromeTheme(Palette::DarkTheme)]);
    }

    #[test]
    fn test_theme_change_effect_order() {
        let state = HostState {
            chromeless: false,
            dark_theme: Some(false),
        };
        let (next, effects) = reduce(&state, HostEvent::SetTheme(true));
        assert_eq!(next.dark_theme, Some(true));
        match &effects[0] {
            Effect::UpdateViewerOptions(options) => {
                assert_eq!(options.colors.axis_text, Color::WHITE);
            }
            other => panic!("expected viewer options update, got {other:?}"),
        }
        assert_eq!(effects[1], Effect::RenderSameLayout);
        assert_eq!(effects[2], Effect::LoadChromeTheme(Palette::DarkTheme));
    }

    #[test]
    fn test_chromeless_toggle() {
        let (state, effects) = reduce(&HostState::default(), HostEvent::SetChromeless(true));
        assert!(state.chromeless);
        assert_eq!(
            effects,
            vec![
                Effect::SetSidebar {
                    closed: true,
                    hide: false
                },
                Effect::Resize
            ]
        );

        let (state, effects) = reduce(&state, HostEvent::SetChromeless(false));
        assert!(!state.chromeless);
        assert_eq!(
            effects[0],
            Effect::SetSidebar {
                closed: false,
                hide: true
            }
        );
    }

    #[test]
    fn test_reducer_is_pure() {
        let state = HostState::default();
        assert_eq!(
            reduce(&state, HostEvent::SetTheme(true)),
            reduce(&state, HostEvent::SetTheme(true))
        );
    }
}
