//! Owned client state and the operations a page load can perform.

use bookclub_api_types::{AuthPayload, Envelope, User};
use time::OffsetDateTime;
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::catalog::Catalog;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::notifications::{self, Notification};
use crate::offline;
use crate::onboarding::{self, Tour, TourProgress};
use crate::preferences::{Consent, ResolvedTheme, Theme};
use crate::search::{self, Suggestions};
use crate::session;
use crate::storage::KeyValueStore;
use crate::toast::{Toast, Toasts};
use crate::validation::{LoginForm, RegistrationForm};
use crate::view::{mock_feed, Section, SectionContent, View};

pub const DEMO_MODE_NOTICE: &str = "Demo mode: the server is unavailable, your session is local";

/// How a login or registration submission ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Signed in, with the endpoint's user or a local stand-in.
    Accepted,
    /// Refused by a local check or by the endpoint; an error toast says why.
    Rejected,
}

pub struct App<S> {
    api: ApiClient,
    store: S,
    prefers_dark: bool,
    catalog: Catalog,
    user: Option<User>,
    view: View,
    notifications: Vec<Notification>,
    tour: Option<Tour>,
    theme: Theme,
    consent: Option<Consent>,
    toasts: Toasts,
}

impl<S: KeyValueStore> App<S> {
    /// One page load: check the endpoint, then restore preferences and the
    /// stored session.
    pub async fn start(config: &ClientConfig, store: S) -> Result<Self, ClientError> {
        let api = ApiClient::new(&config.api_url)?;
        let catalog = Catalog::load(&api).await;
        Self::with_catalog(api, store, catalog, config.prefers_dark)
    }

    /// Start with an already loaded catalog.
    pub fn with_catalog(
        api: ApiClient,
        mut store: S,
        catalog: Catalog,
        prefers_dark: bool,
    ) -> Result<Self, ClientError> {
        let theme = Theme::load(&store);
        let consent = Consent::load(&store);
        let user = session::restore(&mut store)?;

        let mut app = Self {
            api,
            store,
            prefers_dark,
            catalog,
            user: None,
            view: View::Welcome,
            notifications: Vec::new(),
            tour: None,
            theme,
            consent,
            toasts: Toasts::default(),
        };

        if let Some(user) = user {
            info!(user_id = user.id, "session restored");
            app.enter(user);
        }

        Ok(app)
    }

    fn enter(&mut self, user: User) {
        self.user = Some(user);
        self.view = View::Authenticated(Section::Feed);
        self.notifications = notifications::initial(OffsetDateTime::now_utc());
    }

    /// Store the user, switch to the feed and start the tour if it was
    /// never completed.
    fn sign_in(&mut self, user: User, token: Option<&str>) -> Result<(), ClientError> {
        session::persist(&mut self.store, &user, token)?;
        self.enter(user);

        if !onboarding::is_completed(&self.store) {
            self.tour = Some(Tour::start());
        }
        Ok(())
    }

    fn reject(&mut self, message: String) -> Submission {
        self.toasts.error(message);
        Submission::Rejected
    }

    /// Decide between the endpoint's answer and a local stand-in.
    ///
    /// Explicit refusals are shown; any other failure signs in locally.
    fn settle(
        &mut self,
        result: Result<Envelope<AuthPayload>, ClientError>,
        local_user: impl FnOnce() -> User,
    ) -> Result<Submission, ClientError> {
        match result {
            Ok(envelope) => {
                let AuthPayload { user, token } = envelope.data;
                self.sign_in(user, Some(&token))?;
                self.toasts.success(envelope.message);
            }
            Err(e) if e.is_rejection() => {
                info!(error = %e, "submission rejected by endpoint");
                return Ok(self.reject(e.user_message()));
            }
            Err(e) => {
                warn!(error = %e, "endpoint unavailable, signing in locally");
                let user = local_user();
                let greeting = user.first_name.clone();
                self.sign_in(user, None)?;
                self.toasts.info(DEMO_MODE_NOTICE);
                self.toasts.success(format!("Welcome, {greeting}!"));
            }
        }
        Ok(Submission::Accepted)
    }

    pub async fn login(&mut self, form: &LoginForm) -> Result<Submission, ClientError> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => return Ok(self.reject(e.to_string())),
        };

        let result = self.api.login(&request).await;
        let email = request.email.unwrap_or_default();
        self.settle(result, || offline::login_user(&email, OffsetDateTime::now_utc()))
    }

    pub async fn register(&mut self, form: &RegistrationForm) -> Result<Submission, ClientError> {
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => return Ok(self.reject(e.to_string())),
        };

        let result = self.api.register(&request).await;
        self.settle(result, || {
            offline::registered_user(
                request.username.as_deref().unwrap_or_default(),
                request.email.as_deref().unwrap_or_default(),
                request.first_name.as_deref(),
                request.last_name.as_deref(),
                OffsetDateTime::now_utc(),
            )
        })
    }

    pub fn logout(&mut self) -> Result<(), ClientError> {
        session::clear(&mut self.store)?;
        self.user = None;
        self.notifications.clear();
        self.tour = None;
        self.view = View::Welcome;
        self.toasts.success("You have signed out");
        Ok(())
    }

    /// Switch section and load its content.
    pub async fn navigate(&mut self, section: Section) -> Result<SectionContent, ClientError> {
        let Some(user) = self.user.as_ref() else {
            return Err(ClientError::SignedOut);
        };
        self.view = View::Authenticated(section);

        let content = match section {
            Section::Feed => SectionContent::Feed(mock_feed(Some(user))),
            Section::Catalog => SectionContent::Catalog(self.catalog.books().to_vec()),
            Section::Clubs => SectionContent::Clubs(self.catalog.clubs().to_vec()),
            Section::Events => {
                self.toasts.info("Events are coming soon");
                SectionContent::Events
            }
            Section::Profile => {
                let token = session::token(&self.store);
                let profile = match self.api.profile(token.as_deref()).await {
                    Ok(profile) => profile,
                    Err(e) => {
                        warn!(error = %e, "profile unavailable, showing session user");
                        offline::profile_from_user(user)
                    }
                };
                SectionContent::Profile(profile)
            }
        };

        Ok(content)
    }

    pub fn search(&self, query: &str) -> Result<Suggestions, ClientError> {
        if self.user.is_none() {
            return Err(ClientError::SignedOut);
        }
        Ok(search::search(&self.catalog, query))
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, ClientError> {
        self.theme = self.theme.next();
        self.theme.save(&mut self.store)?;
        self.toasts
            .info(format!("Theme changed to {}", self.theme.label()));
        Ok(self.theme)
    }

    pub fn decide_cookies(&mut self, consent: Consent) -> Result<(), ClientError> {
        consent.save(&mut self.store)?;
        self.consent = Some(consent);
        match consent {
            Consent::Accepted => self.toasts.success("Cookie settings saved"),
            Consent::Declined => self
                .toasts
                .warning("Cookies declined. Some features may be unavailable"),
        }
        Ok(())
    }

    pub fn start_onboarding(&mut self) {
        self.tour = Some(Tour::start());
    }

    /// Advance the tour, finishing it after the last step.
    pub fn next_onboarding_step(&mut self) -> Result<(), ClientError> {
        let Some(tour) = self.tour.as_mut() else {
            return Ok(());
        };
        match tour.next() {
            TourProgress::Continue => Ok(()),
            TourProgress::Finished => self.finish_onboarding(),
        }
    }

    pub fn skip_onboarding(&mut self) -> Result<(), ClientError> {
        self.finish_onboarding()
    }

    fn finish_onboarding(&mut self) -> Result<(), ClientError> {
        self.tour = None;
        onboarding::mark_completed(&mut self.store)?;
        self.toasts.success("Welcome to BookClub!");
        Ok(())
    }

    pub fn mark_notifications_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        notifications::unread_count(&self.notifications)
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn resolved_theme(&self) -> ResolvedTheme {
        self.theme.resolve(self.prefers_dark)
    }

    pub fn consent(&self) -> Option<Consent> {
        self.consent
    }

    pub fn needs_consent_banner(&self) -> bool {
        self.consent.is_none()
    }

    pub fn tour(&self) -> Option<&Tour> {
        self.tour.as_ref()
    }

    pub fn toasts_mut(&mut self) -> &mut Toasts {
        &mut self.toasts
    }

    pub fn drain_toasts(&mut self) -> Vec<Toast> {
        self.toasts.drain()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
