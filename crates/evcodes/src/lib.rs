// Evcodes
// Typed Linux input event codes, generated at build time from headers/

include!(concat!(env!("OUT_DIR"), "/event_codes.rs"));

/// Interpret a raw `(type, code)` pair from an input event.
///
/// Pairs whose type or code has no known variant come back as
/// `EventCode::EV_UNK` carrying the raw numbers.
pub fn int_to_event_code(event_type: u32, event_code: u32) -> EventCode {
    let unknown = EventCode::EV_UNK {
        event_type,
        event_code,
    };

    let Some(ev_type) = int_to_event_type(event_type) else {
        return unknown;
    };

    let code = match ev_type {
        EventType::EV_SYN => int_to_ev_syn(event_code).map(EventCode::EV_SYN),
        EventType::EV_KEY => int_to_ev_key(event_code).map(EventCode::EV_KEY),
        EventType::EV_REL => int_to_ev_rel(event_code).map(EventCode::EV_REL),
        EventType::EV_ABS => int_to_ev_abs(event_code).map(EventCode::EV_ABS),
        EventType::EV_MSC => int_to_ev_msc(event_code).map(EventCode::EV_MSC),
        EventType::EV_SW => int_to_ev_sw(event_code).map(EventCode::EV_SW),
        EventType::EV_LED => int_to_ev_led(event_code).map(EventCode::EV_LED),
        EventType::EV_SND => int_to_ev_snd(event_code).map(EventCode::EV_SND),
        EventType::EV_REP => int_to_ev_rep(event_code).map(EventCode::EV_REP),
        EventType::EV_FF => int_to_ev_ff(event_code).map(EventCode::EV_FF),
        EventType::EV_FF_STATUS => int_to_ev_ff(event_code).map(EventCode::EV_FF_STATUS),
        EventType::EV_PWR => Some(EventCode::EV_PWR),
        EventType::EV_UNK => None,
    };

    code.unwrap_or(unknown)
}

impl EventCode {
    /// The event type this code belongs to, `None` for unknown types
    pub fn event_type(&self) -> Option<EventType> {
        match self {
            EventCode::EV_SYN(_) => Some(EventType::EV_SYN),
            EventCode::EV_KEY(_) => Some(EventType::EV_KEY),
            EventCode::EV_REL(_) => Some(EventType::EV_REL),
            EventCode::EV_ABS(_) => Some(EventType::EV_ABS),
            EventCode::EV_MSC(_) => Some(EventType::EV_MSC),
            EventCode::EV_SW(_) => Some(EventType::EV_SW),
            EventCode::EV_LED(_) => Some(EventType::EV_LED),
            EventCode::EV_SND(_) => Some(EventType::EV_SND),
            EventCode::EV_REP(_) => Some(EventType::EV_REP),
            EventCode::EV_FF(_) => Some(EventType::EV_FF),
            EventCode::EV_PWR => Some(EventType::EV_PWR),
            EventCode::EV_FF_STATUS(_) => Some(EventType::EV_FF_STATUS),
            EventCode::EV_UNK { event_type, .. } => int_to_event_type(*event_type),
            // flat button variants
            _ => Some(EventType::EV_KEY),
        }
    }
}
