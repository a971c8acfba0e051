// src/normalize/fields.rs

/// FEC feed tag → canonical field name. Unknown tags pass through.
pub fn translate_field(tag: &str) -> &str {
    match tag {
        "can_nam" => "name",
        "can_off" => "office",
        "can_off_sta" => "state",
        "can_off_dis" => "district",
        "can_par_aff" => "party",
        other => other,
    }
}

/// FEC office code → canonical office. Unknown codes pass through.
pub fn translate_office(code: &str) -> &str {
    match code {
        "P" => "president",
        "H" => "house",
        "S" => "senate",
        other => other,
    }
}
