use crate::delivery::DispatchReceiver;
use fleet_reminders_domain::AlarmPayload;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing::info;

/// Hands every fired alarm to the `DispatchReceiver`. Runs until the
/// alarm manager sending fired alarms is dropped.
pub fn start_alarm_dispatch_job(
    mut fired: UnboundedReceiver<AlarmPayload>,
    receiver: DispatchReceiver,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(payload) = fired.recv().await {
            receiver.on_fire(&payload);
        }
        info!("Alarm manager is gone, stopping alarm dispatch job");
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::setup;
    use fleet_reminders_domain::{ReminderKey, ReminderRequest};
    use tokio::sync::mpsc::unbounded_channel;

    #[tokio::test]
    async fn dispatches_until_sender_is_dropped() {
        let t = setup();
        let ctx = t.ctx.clone();
        let (tx, rx) = unbounded_channel();
        let job = start_alarm_dispatch_job(rx, DispatchReceiver::new(move || ctx.clone()));

        let request = ReminderRequest::reservation(4, 0, "Reservation", "Car 4");
        tx.send(AlarmPayload::new(&request)).unwrap();
        tx.send(AlarmPayload::default()).unwrap();
        drop(tx);

        job.await.unwrap();
        assert_eq!(t.notifications.active().len(), 1);
        assert!(t.notifications.find(&ReminderKey::Reservation(4)).is_some());
    }
}
