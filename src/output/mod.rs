// Output formatting — terminal display of profiles and scores.

pub mod terminal;
