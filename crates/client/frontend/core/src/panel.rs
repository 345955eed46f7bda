//! Ride request panel: the state behind the elevator view.
//!
//! [`RidePanel`] mirrors the service's status feed, validates ride input and
//! owns the feedback message. Everything that changes its state arrives
//! through [`RidePanel::next_update`]: published statuses, ride answers and
//! message clears. Ride requests and clear timers run as spawned tasks that
//! report back over an internal channel, so the panel itself is only ever
//! mutated by the task that drives it.
use elevator_core::{
    ElevatorStatus, Floor, FloorRange, RideRequest, RideResponse, RideValidationError,
    validate_ride, validate_ride_input,
};
use runtime::{ApiError, ElevatorService, StatusSubscription};
use tokio::sync::mpsc;
use tokio::task::AbortHandle;
use tracing::debug;

use crate::config::FrontendConfig;
use crate::form::{Field, RideForm};
use crate::message::RideMessage;

/// What a call to [`RidePanel::next_update`] changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PanelUpdate {
    /// A new status list was mirrored.
    Statuses,
    /// A ride request was answered and its message shown.
    RideAnswered,
    /// A clear timer fired and the message was removed.
    MessageCleared,
    /// The status feed closed; mirroring stopped.
    FeedClosed,
}

enum PanelEvent {
    Ride(Result<RideResponse, ApiError>),
    ClearMessage,
}

pub struct RidePanel {
    service: ElevatorService,
    config: FrontendConfig,

    elevators: Vec<ElevatorStatus>,
    form: RideForm,
    message: Option<RideMessage>,

    subscription: Option<StatusSubscription>,
    timers: Vec<AbortHandle>,
    events_tx: mpsc::UnboundedSender<PanelEvent>,
    events_rx: mpsc::UnboundedReceiver<PanelEvent>,
}

impl RidePanel {
    pub fn new(service: ElevatorService, config: FrontendConfig) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            service,
            config,
            elevators: Vec::new(),
            form: RideForm::new(),
            message: None,
            subscription: None,
            timers: Vec::new(),
            events_tx,
            events_rx,
        }
    }

    /// Subscribe to the status feed and mirror its current list.
    pub fn activate(&mut self) {
        if self.subscription.is_some() {
            return;
        }
        let mut subscription = self.service.subscribe();
        self.elevators = subscription.latest();
        self.subscription = Some(subscription);
    }

    /// Stop mirroring statuses and drop the message with its pending clears.
    pub fn deactivate(&mut self) {
        self.subscription = None;
        self.cancel_timers();
        self.message = None;
    }

    pub fn is_active(&self) -> bool {
        self.subscription.is_some()
    }

    /// Validate a ride and, if valid, send it to the backend.
    ///
    /// Validation failures set an error message immediately. A valid request
    /// is sent in the background; its answer is applied by
    /// [`next_update`](Self::next_update).
    pub fn request_ride(&mut self, pickup: Option<Floor>, destination: Option<Floor>) {
        let validated = validate_ride(pickup, destination, self.config.floors);
        self.dispatch(validated);
    }

    /// Validate the typed form fields and request a ride.
    pub fn submit(&mut self) {
        let validated = validate_ride_input(
            self.form.value(Field::Pickup),
            self.form.value(Field::Destination),
            self.config.floors,
        );
        self.dispatch(validated);
    }

    /// Begin polling and tell the backend to start, without waiting for it.
    pub fn start_simulation(&self) {
        self.service.start_simulation(self.config.poll_interval);
    }

    /// Clear both inputs and stop the simulation, without waiting for the
    /// backend. The emptied list arrives through
    /// [`next_update`](Self::next_update) once the backend confirms.
    pub fn stop_simulation(&mut self) {
        self.form.clear();
        self.service.stop_simulation();
    }

    /// Wait for the next state change and apply it.
    ///
    /// Pending forever while nothing can change; callers race it against
    /// their own input sources.
    pub async fn next_update(&mut self) -> PanelUpdate {
        tokio::select! {
            statuses = next_statuses(&mut self.subscription) => match statuses {
                Some(statuses) => {
                    self.elevators = statuses;
                    PanelUpdate::Statuses
                }
                None => {
                    self.subscription = None;
                    PanelUpdate::FeedClosed
                }
            },
            Some(event) = self.events_rx.recv() => self.apply(event),
        }
    }

    pub fn elevators(&self) -> &[ElevatorStatus] {
        &self.elevators
    }

    pub fn message(&self) -> Option<&RideMessage> {
        self.message.as_ref()
    }

    pub fn form(&self) -> &RideForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut RideForm {
        &mut self.form
    }

    pub fn floors(&self) -> FloorRange {
        self.config.floors
    }

    pub fn service(&self) -> &ElevatorService {
        &self.service
    }

    fn dispatch(&mut self, validated: Result<RideRequest, RideValidationError>) {
        let request = match validated {
            Ok(request) => request,
            Err(error) => {
                debug!("Rejected ride input: {}", error);
                if error.clears_inputs() {
                    self.form.clear();
                }
                self.show_message(error.into());
                return;
            }
        };

        let service = self.service.clone();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = service
                .request_ride(request.pickup_floor, request.destination_floor)
                .await;
            // Receiver is gone once the panel is dropped.
            let _ = events.send(PanelEvent::Ride(result));
        });
    }

    fn apply(&mut self, event: PanelEvent) -> PanelUpdate {
        match event {
            PanelEvent::Ride(Ok(response)) => {
                self.show_message(RideMessage::from_response(response));
                PanelUpdate::RideAnswered
            }
            PanelEvent::Ride(Err(error)) => {
                debug!("Ride request failed: {}", error);
                self.show_message(RideMessage::from_failure(&error));
                PanelUpdate::RideAnswered
            }
            PanelEvent::ClearMessage => {
                self.message = None;
                PanelUpdate::MessageCleared
            }
        }
    }

    /// Show `message` and schedule its own clear.
    ///
    /// Each message gets an independent timer; an earlier timer also clears a
    /// message that replaced the one it was scheduled for.
    fn show_message(&mut self, message: RideMessage) {
        self.message = Some(message);

        self.timers.retain(|timer| !timer.is_finished());
        let delay = self.config.messages.clear_after;
        let events = self.events_tx.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(PanelEvent::ClearMessage);
        });
        self.timers.push(timer.abort_handle());
    }

    fn cancel_timers(&mut self) {
        for timer in self.timers.drain(..) {
            timer.abort();
        }
    }
}

impl Drop for RidePanel {
    fn drop(&mut self) {
        self.cancel_timers();
    }
}

async fn next_statuses(subscription: &mut Option<StatusSubscription>) -> Option<Vec<ElevatorStatus>> {
    match subscription {
        Some(subscription) => subscription.next().await,
        None => std::future::pending().await,
    }
}
