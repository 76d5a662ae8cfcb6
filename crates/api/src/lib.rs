mod delivery;
mod error;
mod job_schedulers;
mod preference;
mod reminder;
mod shared;

pub use delivery::{DispatchReceiver, NotificationSink};
pub use error::ReminderError;
use fleet_reminders_domain::AlarmPayload;
use fleet_reminders_infra::ReminderContext;
pub use job_schedulers::start_alarm_dispatch_job;
pub use preference::PreferenceGate;
pub use reminder::ReminderScheduler;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::error;

/// The reminder subsystem wired to a host whose fired alarms arrive on a
/// channel, e.g. the one returned by `setup_context`.
pub struct Application {
    context: ReminderContext,
    dispatch_job: JoinHandle<()>,
}

impl Application {
    /// Starts the alarm dispatch job. Async because the job is spawned on
    /// the current tokio runtime, so there has to be one.
    pub async fn new(context: ReminderContext, fired: UnboundedReceiver<AlarmPayload>) -> Self {
        let receiver = Self::create_receiver(context.clone());
        let dispatch_job = start_alarm_dispatch_job(fired, receiver);

        Self {
            context,
            dispatch_job,
        }
    }

    fn create_receiver(context: ReminderContext) -> DispatchReceiver {
        DispatchReceiver::new(move || context.clone())
    }

    pub fn scheduler(&self) -> ReminderScheduler {
        ReminderScheduler::new(self.context.clone())
    }

    pub fn preferences(&self) -> PreferenceGate {
        PreferenceGate::new(self.context.clone())
    }

    /// The receiver for alarms the host persisted and fires itself. Each
    /// fire resolves its own copy of the context.
    pub fn receiver(&self) -> DispatchReceiver {
        Self::create_receiver(self.context.clone())
    }

    pub fn sink(&self) -> NotificationSink {
        NotificationSink::new(self.context.clone())
    }

    /// Runs until the alarm dispatch job stops
    pub async fn start(self) {
        if let Err(e) = self.dispatch_job.await {
            error!("Alarm dispatch job failed: {:?}", e);
        }
    }

    pub fn stop(self) {
        self.dispatch_job.abort();
    }
}
