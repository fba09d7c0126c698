//! Interactive page browser - Reaction-driven navigation over a paginated message.
//!
//! A [`BrowserSession`] is the pure state machine: it owns the pages, the
//! current index and the one viewer allowed to navigate. [`BrowserSession::run`]
//! drives it against a [`BrowserSurface`], which hides the chat platform
//! (publishing controls, delivering signals, editing the message).
//!
//! The session closes when the viewer dismisses it, when no accepted signal
//! arrives within the inactivity timeout, or when the signal source ends.
//! Controls are removed exactly once on close.

use crate::{
    core::pagination::{self, Pages},
    errors::Result,
};
use std::{future::Future, time::Duration};
use tokio::time::{Instant, timeout_at};
use tracing::{Instrument, Span, debug, info, warn};

/// Shortest allowed inactivity timeout.
pub const MIN_TIMEOUT: Duration = Duration::from_secs(60);
/// Longest allowed inactivity timeout.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(600);

/// A navigation affordance attached to the browsed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Go back one page (wraps to the last page)
    Previous,
    /// Go forward one page (wraps to the first page)
    Next,
    /// Close the browser
    Dismiss,
}

impl Control {
    /// Controls in the order they are attached to the message.
    pub const ALL: [Self; 3] = [Self::Previous, Self::Next, Self::Dismiss];

    /// Reaction emoji for this control.
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Previous => "⬅️",
            Self::Next => "➡️",
            Self::Dismiss => "❌",
        }
    }

    /// Maps a reaction emoji back to a control. Variation selectors are ignored.
    #[must_use]
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        let strip = |s: &str| s.replace('\u{FE0F}', "");
        let wanted = strip(emoji);
        Self::ALL.into_iter().find(|c| strip(c.emoji()) == wanted)
    }
}

/// A navigation signal delivered by the surface.
///
/// `ack` is whatever the surface needs to clear the signal afterwards
/// (for Discord, the reaction itself).
#[derive(Debug, Clone)]
pub struct Signal<A> {
    /// Who produced the signal
    pub user_id: u64,
    /// The recognised control, or `None` for any other affordance
    pub control: Option<Control>,
    /// Handle used to acknowledge the signal
    pub ack: A,
}

/// Current state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the page at this index
    Active(usize),
    /// Torn down; no further signals are processed
    Closed,
}

/// Result of feeding one signal to the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Unauthorized source, unknown control, or already closed
    Ignored,
    /// Moved to the page at this index
    Moved(usize),
    /// The viewer closed the session
    Dismissed,
}

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The viewer pressed dismiss
    Dismissed,
    /// No accepted signal within the inactivity timeout
    TimedOut,
    /// The signal source stopped delivering
    SourceEnded,
}

/// Final report of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOutcome {
    /// Why the session closed
    pub reason: CloseReason,
    /// Index of the page shown when it closed
    pub last_index: usize,
}

/// The platform side of a browser session.
pub trait BrowserSurface {
    /// Handle used to clear a consumed signal.
    type Ack: Send;

    /// Attaches the navigation affordances, in order.
    fn attach_controls(&mut self, controls: &[Control])
    -> impl Future<Output = Result<()>> + Send;

    /// Waits for the next signal; `None` once the source has ended.
    fn next_signal(&mut self) -> impl Future<Output = Option<Signal<Self::Ack>>> + Send;

    /// Replaces the message body with `content` and sets the footer.
    fn render(&mut self, content: &str, footer: &str) -> impl Future<Output = Result<()>> + Send;

    /// Clears a consumed signal so it cannot be processed again.
    fn acknowledge(&mut self, ack: Self::Ack) -> impl Future<Output = Result<()>> + Send;

    /// Removes every affordance from the message.
    fn clear_controls(&mut self) -> impl Future<Output = Result<()>> + Send;
}

/// Paginated browsing state bound to one message and one viewer.
#[derive(Debug)]
pub struct BrowserSession {
    pages: Pages,
    viewer: u64,
    state: SessionState,
    last_index: usize,
    span: Span,
}

impl BrowserSession {
    /// Opens a session on page 0.
    ///
    /// `span` is the logging context every event of this session is recorded in.
    #[must_use]
    pub const fn new(pages: Pages, viewer: u64, span: Span) -> Self {
        Self {
            pages,
            viewer,
            state: SessionState::Active(0),
            last_index: 0,
            span,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// The pages being browsed.
    #[must_use]
    pub const fn pages(&self) -> &Pages {
        &self.pages
    }

    /// Content of the current page (the last shown page once closed).
    #[must_use]
    pub fn current_page(&self) -> &str {
        self.pages.get(self.last_index).unwrap_or_default()
    }

    /// Footer for the current page.
    #[must_use]
    pub fn footer(&self) -> String {
        self.pages.footer(self.last_index)
    }

    /// Feeds one signal to the state machine.
    pub fn apply(&mut self, user_id: u64, control: Option<Control>) -> Transition {
        let SessionState::Active(index) = self.state else {
            return Transition::Ignored;
        };
        if user_id != self.viewer {
            return Transition::Ignored;
        }

        let count = self.pages.len();
        match control {
            None => Transition::Ignored,
            Some(Control::Previous) => {
                let index = pagination::previous(index, count);
                self.state = SessionState::Active(index);
                self.last_index = index;
                Transition::Moved(index)
            }
            Some(Control::Next) => {
                let index = pagination::next(index, count);
                self.state = SessionState::Active(index);
                self.last_index = index;
                Transition::Moved(index)
            }
            Some(Control::Dismiss) => {
                self.state = SessionState::Closed;
                Transition::Dismissed
            }
        }
    }

    /// Attaches controls and processes signals until the session closes.
    ///
    /// The inactivity timer restarts after every accepted signal. Ignored
    /// signals do not extend the session.
    pub async fn run<S>(self, surface: &mut S, inactivity: Duration) -> Result<SessionOutcome>
    where
        S: BrowserSurface + Send,
    {
        let span = self.span.clone();
        self.drive(surface, inactivity).instrument(span).await
    }

    async fn drive<S>(mut self, surface: &mut S, inactivity: Duration) -> Result<SessionOutcome>
    where
        S: BrowserSurface + Send,
    {
        let result = self.listen(surface, inactivity).await;
        let cleared = surface.clear_controls().await;
        self.state = SessionState::Closed;

        let reason = match (result, cleared) {
            (Ok(reason), Ok(())) => reason,
            (Ok(_), Err(e)) => return Err(e),
            (Err(e), cleared) => {
                if let Err(clear_err) = cleared {
                    warn!("Failed to remove controls after error: {clear_err}");
                }
                warn!("Browser session aborted: {e}");
                return Err(e);
            }
        };
        info!(?reason, page = self.last_index + 1, "Browser session closed");
        Ok(SessionOutcome {
            reason,
            last_index: self.last_index,
        })
    }

    async fn listen<S>(
        &mut self,
        surface: &mut S,
        inactivity: Duration,
    ) -> Result<CloseReason>
    where
        S: BrowserSurface + Send,
    {
        surface.attach_controls(&Control::ALL).await?;
        debug!(pages = self.pages.len(), "Browser session listening");

        let mut deadline = Instant::now() + inactivity;
        loop {
            let signal = match timeout_at(deadline, surface.next_signal()).await {
                Err(_) => return Ok(CloseReason::TimedOut),
                Ok(None) => return Ok(CloseReason::SourceEnded),
                Ok(Some(signal)) => signal,
            };

            match self.apply(signal.user_id, signal.control) {
                Transition::Ignored => {
                    debug!(user_id = signal.user_id, "Ignoring signal");
                }
                Transition::Moved(index) => {
                    debug!(page = index + 1, "Turning page");
                    surface.acknowledge(signal.ack).await?;
                    surface
                        .render(self.current_page(), &self.footer())
                        .await?;
                    deadline = Instant::now() + inactivity;
                }
                Transition::Dismissed => {
                    surface.acknowledge(signal.ack).await?;
                    return Ok(CloseReason::Dismissed);
                }
            }
        }
    }
}
