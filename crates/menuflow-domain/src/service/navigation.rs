//! Navigation binder - Cross-menu argument passing
//!
//! `[openmenu] <target> [values...]` binds positional values against the
//! target's declared parameters:
//!
//! ```text
//! target declares    values given      result
//! ───────────────────────────────────────────────────────────────
//! nothing            any               inherit current bindings (+ warning)
//! [a, b]             none              inherit current bindings
//! [a, b]             fewer than 2      abort
//! [a, b]             x y z             current bindings + a=x, b="y z"
//! ```
//!
//! The binder decides; the dispatcher performs the open.

use crate::model::arguments::Arguments;
use crate::model::session::{ScreenDefinition, Session};
use shared::{ActionError, PlayerId};

/// What the open-menu action should do
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationPlan {
    pub screen: ScreenDefinition,
    /// Bindings for the new session; `None` opens the screen fresh
    pub arguments: Option<Arguments>,
    pub placeholder_identity: Option<PlayerId>,
    /// Problems that did not stop navigation
    pub warnings: Vec<ActionError>,
}

/// Bind open-menu text against the target screen
///
/// `lookup` resolves a screen by exact name. `session` is the acting
/// player's current session, if any.
pub fn bind(
    text: &str,
    session: Option<&Session>,
    lookup: impl FnOnce(&str) -> Option<ScreenDefinition>,
) -> Result<NavigationPlan, ActionError> {
    let mut tokens = text.split_whitespace();
    let target = tokens.next().unwrap_or_default();
    let values: Vec<&str> = tokens.collect();

    let screen = lookup(target).ok_or_else(|| ActionError::UnknownMenu(text.to_string()))?;
    let inherited = session.map(|s| s.arguments.clone());
    let placeholder_identity = session.and_then(|s| s.placeholder_identity);

    let parameters = screen.parameters();

    if parameters.is_empty() {
        let mut warnings = Vec::new();
        if !values.is_empty() {
            warnings.push(ActionError::UnexpectedArguments(screen.name().to_string()));
        }
        return Ok(NavigationPlan {
            screen,
            arguments: inherited,
            placeholder_identity,
            warnings,
        });
    }

    // Older menus open parameterised screens without values and rely on
    // the caller's bindings carrying over.
    if values.is_empty() {
        return Ok(NavigationPlan {
            screen,
            arguments: inherited,
            placeholder_identity,
            warnings: Vec::new(),
        });
    }

    if values.len() < parameters.len() {
        return Err(ActionError::InsufficientArguments {
            menu: screen.name().to_string(),
            expected: parameters.len(),
            given: values.len(),
        });
    }

    let mut arguments = inherited.unwrap_or_default();
    let last = parameters.len() - 1;
    for (index, name) in parameters.iter().enumerate() {
        if index == last {
            arguments.insert(name.clone(), values[index..].join(" "));
        } else {
            arguments.insert(name.clone(), values[index]);
        }
    }

    Ok(NavigationPlan {
        screen,
        arguments: Some(arguments),
        placeholder_identity,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screens(name: &str) -> Option<ScreenDefinition> {
        match name {
            "main" => Some(ScreenDefinition::new("main")),
            "shop" => Some(ScreenDefinition::new("shop").with_parameters(["a", "b", "c"])),
            "pair" => Some(ScreenDefinition::new("pair").with_parameters(["a", "b"])),
            _ => None,
        }
    }

    fn session() -> Session {
        let viewer = PlayerId::random();
        Session::new(viewer, "main")
            .with_arguments([("a", "old"), ("page", "4")].into_iter().collect())
            .with_placeholder_identity(viewer)
    }

    #[test]
    fn test_last_parameter_joins_remaining_values() {
        let plan = bind("shop x y z w", None, screens).unwrap();
        let args = plan.arguments.unwrap();

        assert_eq!(args.get("a"), Some("x"));
        assert_eq!(args.get("b"), Some("y"));
        assert_eq!(args.get("c"), Some("z w"));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_whitespace_is_normalised() {
        let plan = bind("  shop   x\t y    z ", None, screens).unwrap();
        let args = plan.arguments.unwrap();
        assert_eq!(args.get("c"), Some("z"));
    }

    #[test]
    fn test_too_few_values_aborts() {
        let err = bind("pair only-one", Some(&session()), screens).unwrap_err();
        assert_eq!(
            err,
            ActionError::InsufficientArguments {
                menu: "pair".into(),
                expected: 2,
                given: 1
            }
        );
    }

    #[test]
    fn test_unknown_screen() {
        let err = bind("nowhere 1 2", None, screens).unwrap_err();
        assert_eq!(err, ActionError::UnknownMenu("nowhere 1 2".into()));
        assert!(bind("", None, screens).is_err());
    }

    #[test]
    fn test_parameterless_screen_inherits_and_warns() {
        let current = session();
        let plan = bind("main stray tokens", Some(&current), screens).unwrap();

        assert_eq!(plan.arguments, Some(current.arguments.clone()));
        assert_eq!(plan.placeholder_identity, current.placeholder_identity);
        assert_eq!(plan.warnings, vec![ActionError::UnexpectedArguments("main".into())]);
    }

    #[test]
    fn test_parameterless_screen_without_session_opens_fresh() {
        let plan = bind("main", None, screens).unwrap();
        assert_eq!(plan.arguments, None);
        assert_eq!(plan.placeholder_identity, None);
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_no_values_reuses_current_bindings() {
        let current = session();
        let plan = bind("pair", Some(&current), screens).unwrap();
        assert_eq!(plan.arguments, Some(current.arguments));
        assert!(plan.warnings.is_empty());
    }

    #[test]
    fn test_new_values_overlay_inherited_bindings() {
        let current = session();
        let plan = bind("pair new value", Some(&current), screens).unwrap();
        let args = plan.arguments.unwrap();

        assert_eq!(args.get("a"), Some("new"));
        assert_eq!(args.get("b"), Some("value"));
        assert_eq!(args.get("page"), Some("4"));
        assert_eq!(args.names().collect::<Vec<_>>(), vec!["a", "page", "b"]);
        assert_eq!(plan.placeholder_identity, current.placeholder_identity);
    }
}
