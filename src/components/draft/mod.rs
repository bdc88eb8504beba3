// Draft components - experimental, rendered only inside the showcase
//
// Nothing outside `components` and the showcase demo table should depend on
// this module. Promote a component by moving it up one level and moving its
// registry entry from `draft_components` to `custom_components`.

mod example_card;

pub use example_card::ExampleCard;
