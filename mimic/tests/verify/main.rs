mod in_order;
mod no_more_interactions;
mod record_every_call;
mod times;
