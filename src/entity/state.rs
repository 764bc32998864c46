#[derive(Clone, Default, Debug)]
pub enum State {
    #[default]
    Start,
    AwaitingSpinAmount {
        token: String,
    },
    ReadyToSpin {
        token: String,
        amount: String,
    },
}
