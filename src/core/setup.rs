//! First-run credential setup as an explicit sequence of steps.
//!
//! `LoadCached → Authenticate → SelectRole → SelectUser → Persist`. Each step
//! either moves on, asks for input, finishes or fails; the driver in
//! [`run_setup`] does the prompting so the steps themselves stay testable.

use crate::credentials::{CredentialStore, Credentials};
use crate::errors::{AppError, AppResult};
use crate::models::account::{Role, User};
use crate::remote::TimeService;
use crate::ui::messages::{error, plain};
use crate::ui::prompt::Prompter;

const FIRST_RUN_WELCOME: &str = "\n🕗 Welcome to Tickory, an unofficial CLI for Tick time tracking. Before using\nfor the first time, you will need to set up access to Tickspot. Please answer\nthe following questions and then you will be all set!\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    LoadCached,
    Authenticate,
    SelectRole,
    SelectUser,
    Persist,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputRequest {
    Login,
    Role(Vec<Role>),
    User(Vec<User>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAnswer {
    Login { username: String, password: String },
    Role(usize),
    User(usize),
}

#[derive(Debug)]
pub enum StepOutcome {
    Next(SetupStep),
    NeedsInput(InputRequest),
    Done,
    Fatal(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOutcome {
    pub credentials: Credentials,
    pub from_cache: bool,
}

pub struct CredentialSetup {
    pub step: SetupStep,
    credentials: Credentials,
    roles: Vec<Role>,
    users: Vec<User>,
    from_cache: bool,
}

impl Default for CredentialSetup {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialSetup {
    pub fn new() -> Self {
        Self {
            step: SetupStep::LoadCached,
            credentials: Credentials::default(),
            roles: Vec::new(),
            users: Vec::new(),
            from_cache: false,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Run the current step.
    pub fn advance<F>(&mut self, store: &CredentialStore, connect: &F) -> StepOutcome
    where
        F: Fn(&Credentials) -> AppResult<Box<dyn TimeService>>,
    {
        match self.step {
            SetupStep::LoadCached => match store.load() {
                Ok(Some(cached)) if cached.is_complete() => {
                    self.credentials = cached;
                    self.from_cache = true;
                    StepOutcome::Done
                }
                Ok(_) => StepOutcome::Next(SetupStep::Authenticate),
                Err(e) => StepOutcome::Fatal(e),
            },

            SetupStep::Authenticate => {
                if self.credentials.username.is_none() || self.credentials.password.is_none() {
                    return StepOutcome::NeedsInput(InputRequest::Login);
                }

                let roles = match connect(&self.credentials).and_then(|s| s.list_roles()) {
                    Ok(r) => r,
                    Err(e) => {
                        log::debug!("role lookup failed: {}", e);
                        return StepOutcome::Fatal(AppError::Authentication);
                    }
                };

                match roles.len() {
                    0 => StepOutcome::Fatal(AppError::Authentication),
                    1 => {
                        self.use_role(&roles[0]);
                        StepOutcome::Next(SetupStep::SelectUser)
                    }
                    _ => {
                        self.roles = roles;
                        StepOutcome::Next(SetupStep::SelectRole)
                    }
                }
            }

            SetupStep::SelectRole => StepOutcome::NeedsInput(InputRequest::Role(self.roles.clone())),

            SetupStep::SelectUser => {
                if !self.users.is_empty() {
                    return StepOutcome::NeedsInput(InputRequest::User(self.users.clone()));
                }

                let mut users = match connect(&self.credentials).and_then(|s| s.list_users()) {
                    Ok(u) => u,
                    Err(e) => return StepOutcome::Fatal(e),
                };
                users.sort_by(|a, b| a.first_name.cmp(&b.first_name));

                match users.len() {
                    0 => StepOutcome::Fatal(AppError::NoUsers),
                    1 => {
                        self.credentials.user_id = Some(users[0].id);
                        StepOutcome::Next(SetupStep::Persist)
                    }
                    _ => {
                        self.users = users;
                        StepOutcome::NeedsInput(InputRequest::User(self.users.clone()))
                    }
                }
            }

            SetupStep::Persist => {
                // The session goes on with in-memory credentials either way.
                if let Err(e) = store.save(&self.credentials) {
                    log::warn!("saving credentials to {} failed: {}", store.path().display(), e);
                    error("😱 Something went wrong while saving your Tickspot credentials.");
                }
                StepOutcome::Done
            }
        }
    }

    /// Feed the answer to the last `NeedsInput` request.
    pub fn provide(&mut self, answer: InputAnswer) -> AppResult<()> {
        match answer {
            InputAnswer::Login { username, password } => {
                self.credentials.update(Credentials {
                    username: Some(username),
                    password: Some(password),
                    ..Default::default()
                });
                self.step = SetupStep::Authenticate;
            }
            InputAnswer::Role(idx) => {
                let role = self
                    .roles
                    .get(idx)
                    .cloned()
                    .ok_or_else(|| AppError::InvalidInput(format!("no subscription #{}", idx + 1)))?;
                self.use_role(&role);
                self.step = SetupStep::SelectUser;
            }
            InputAnswer::User(idx) => {
                let user = self
                    .users
                    .get(idx)
                    .ok_or_else(|| AppError::InvalidInput(format!("no user #{}", idx + 1)))?;
                self.credentials.user_id = Some(user.id);
                self.step = SetupStep::Persist;
            }
        }
        Ok(())
    }

    fn use_role(&mut self, role: &Role) {
        self.credentials.update(Credentials {
            subscription_id: Some(role.subscription_id),
            token: Some(role.api_token.clone()),
            ..Default::default()
        });
    }

    pub fn finish(self) -> SetupOutcome {
        SetupOutcome {
            credentials: self.credentials,
            from_cache: self.from_cache,
        }
    }
}

fn ask<P: Prompter + ?Sized>(prompter: &mut P, request: &InputRequest) -> AppResult<InputAnswer> {
    match request {
        InputRequest::Login => {
            plain(FIRST_RUN_WELCOME);
            let username = prompter.input("What is your Tickspot username?", None)?;
            let password = prompter.password("What is your Tickspot password?")?;
            Ok(InputAnswer::Login { username, password })
        }
        InputRequest::Role(roles) => {
            let labels: Vec<String> = roles.iter().map(Role::label).collect();
            let idx = prompter.select("What Tickspot subscription you would like to use?", &labels)?;
            Ok(InputAnswer::Role(idx))
        }
        InputRequest::User(users) => {
            let labels: Vec<String> = users.iter().map(User::full_name).collect();
            let idx = prompter.select("Please select your name from the list below.", &labels)?;
            Ok(InputAnswer::User(idx))
        }
    }
}

/// Drive the steps until credentials are available or a step fails.
pub fn run_setup<P, F>(store: &CredentialStore, prompter: &mut P, connect: F) -> AppResult<SetupOutcome>
where
    P: Prompter + ?Sized,
    F: Fn(&Credentials) -> AppResult<Box<dyn TimeService>>,
{
    let mut setup = CredentialSetup::new();

    loop {
        match setup.advance(store, &connect) {
            StepOutcome::Next(step) => {
                log::debug!("setup: {:?} -> {:?}", setup.step, step);
                setup.step = step;
            }
            StepOutcome::NeedsInput(request) => {
                let answer = ask(prompter, &request)?;
                setup.provide(answer)?;
            }
            StepOutcome::Done => return Ok(setup.finish()),
            StepOutcome::Fatal(e) => return Err(e),
        }
    }
}
