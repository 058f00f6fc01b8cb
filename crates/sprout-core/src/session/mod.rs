//! Care session: picks a species, then runs care actions until the user
//! says stop.

pub mod phase;

use crate::care::{AppliedAction, CareAction};
use crate::console::{CareContext, Console, Pacer};
use crate::error::SessionError;
use crate::locale::Locale;
use crate::plant::Plant;
use crate::policy::{PolicyRegistry, Species, TimingPolicy};
use crate::prompt::{Choices, PromptText, prompt_until_member};

pub use phase::SessionPhase;

/// What a finished session leaves behind.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub species: Species,
    pub plant: Plant,
    pub actions: Vec<AppliedAction>,
}

/// Drives one interactive session over a console.
///
/// Holds the catalog of care actions and the catalog of timing policies.
/// Species selection binds exactly one policy and creates exactly one
/// [`Plant`] for the whole session.
pub struct CareSession<'a> {
    locale: Locale,
    console: &'a mut dyn Console,
    pacer: &'a mut dyn Pacer,
    registry: PolicyRegistry,
    actions: [CareAction; 4],
}

impl<'a> CareSession<'a> {
    /// Create a session offering every built-in species and care action.
    pub fn new(locale: Locale, console: &'a mut dyn Console, pacer: &'a mut dyn Pacer) -> Self {
        Self {
            locale,
            console,
            pacer,
            registry: PolicyRegistry::with_defaults(),
            actions: CareAction::ALL,
        }
    }

    /// Replace the policy catalog. Only species present in `registry` can
    /// be selected.
    pub fn with_registry(mut self, registry: PolicyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Run the session to termination.
    pub fn run(self) -> Result<SessionSummary, SessionError> {
        let CareSession {
            locale,
            console,
            pacer,
            registry,
            actions,
        } = self;

        let mut phase = SessionPhase::SelectSpecies;
        tracing::info!(locale = %locale, "care session started");

        // Species selection binds the policy.
        let species_choices: Choices<&dyn TimingPolicy> = registry
            .iter()
            .map(|policy| (locale.species_token(policy.species()), policy))
            .collect();
        let species_text = PromptText {
            first: locale.with_options(locale.species_question(), species_choices.tokens()),
            retry: format!("{} ", locale.species_question()),
            rejection: locale.unknown_species().to_string(),
        };
        let policy: &dyn TimingPolicy =
            *prompt_until_member(&mut *console, &species_text, &species_choices)?;
        let species = policy.species();
        let mut plant = Plant::new(locale.species_token(species));
        tracing::info!(species = %species, "species selected");
        phase.advance(SessionPhase::SelectAction)?;

        let action_choices: Choices<CareAction> = actions
            .iter()
            .map(|action| (locale.action_token(*action), *action))
            .collect();
        let action_text = PromptText {
            first: locale.with_options(locale.action_question(), action_choices.tokens()),
            retry: format!("{} ", locale.action_question()),
            rejection: locale.unknown_action().to_string(),
        };

        let continue_choices = Choices::new()
            .with(locale.yes_token(), true)
            .with(locale.no_token(), false);
        let continue_prompt =
            locale.with_options(locale.continue_question(), continue_choices.tokens());
        let continue_text = PromptText {
            first: continue_prompt.clone(),
            retry: continue_prompt,
            rejection: locale.invalid_answer().to_string(),
        };

        let mut applied = Vec::new();
        while !phase.is_terminal() {
            let action = *prompt_until_member(&mut *console, &action_text, &action_choices)?;

            let mut ctx = CareContext::new(&mut *console, &mut *pacer, locale);
            applied.push(policy.apply(action, &mut plant, &mut ctx)?);
            phase.advance(SessionPhase::AwaitContinue)?;

            let more = *prompt_until_member(&mut *console, &continue_text, &continue_choices)?;
            if more {
                phase.advance(SessionPhase::SelectAction)?;
            } else {
                phase.advance(SessionPhase::Terminated)?;
                console.say(locale.shutdown())?;
            }
        }

        tracing::info!(
            species = %species,
            actions = applied.len(),
            growth = plant.growth(),
            "care session finished"
        );

        Ok(SessionSummary {
            species,
            plant,
            actions: applied,
        })
    }
}
