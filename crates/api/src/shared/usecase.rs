use fleet_reminders_infra::ReminderContext;
use std::fmt::Debug;
use tracing::error;

/// A single operation of the reminder subsystem.
///
/// Use cases are synchronous: they only read preferences and talk to the
/// host facilities, which never block for long.
pub trait UseCase: Debug {
    type Response;
    type Error;

    const NAME: &'static str;

    fn execute(&mut self, ctx: &ReminderContext) -> Result<Self::Response, Self::Error>;
}

#[tracing::instrument(name = "Executing usecase", skip(usecase, ctx), fields(usecase = U::NAME))]
pub fn execute<U>(mut usecase: U, ctx: &ReminderContext) -> Result<U::Response, U::Error>
where
    U: UseCase,
    U::Error: Debug,
{
    let res = usecase.execute(ctx);

    if let Err(e) = &res {
        error!("Use case error: {:?}", e);
    }

    res
}
