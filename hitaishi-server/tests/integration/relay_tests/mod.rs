mod test_offer_reaches_destination_only;
mod test_per_sender_ordering;
mod test_reconnect_gets_new_id;
mod test_unknown_destination_is_dropped;
mod test_welcome_sent_once;
mod test_ws_malformed_frame;
mod test_ws_signaling_flow;
