//! Plain-text construction report.

use std::fmt::Write;

use yantra_core::calibration::{SiteConstants, TimeCalibration};
use yantra_core::engine::SiteSurvey;
use yantra_core::instruments::bhitti::BhittiDimensions;
use yantra_core::instruments::digamsa::DigamsaDimensions;
use yantra_core::instruments::nadi_valaya::NadiValayaDimensions;
use yantra_core::instruments::rama::{RamaDimensions, ScaleSurface};
use yantra_core::instruments::samrat::SamratDimensions;
use yantra_core::instruments::{InstrumentDimensions, InstrumentId};
use yantra_core::units::Dms;

const RULE: &str = "═══════════════════════════════════════════════";

fn dms(deg: f64) -> String {
    Dms::from_degrees(deg).to_string()
}

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "  {}", title);
    let _ = writeln!(out, "{}", RULE);
}

/// Render a survey as a sectioned report, one section per instrument.
pub fn render_text(survey: &SiteSurvey) -> String {
    let mut out = String::new();
    let params = &survey.instruments.parameters;

    banner(&mut out, "YANTRA CONSTRUCTION REPORT");
    let _ = writeln!(out);
    let _ = writeln!(out, "Input:");
    let _ = writeln!(out, "  Latitude:  {:.4}° N ({})", params.latitude_deg(), dms(params.latitude_deg()));
    let _ = writeln!(out, "  Scale R:   {}", params.scale());
    let _ = writeln!(out);

    site_section(&mut out, &survey.site);
    if let Some(calibration) = &survey.calibration {
        calibration_section(&mut out, calibration);
    }

    for id in InstrumentId::ALL {
        banner(&mut out, &id.display_name().to_uppercase());
        match survey.instruments.get(id) {
            Some(InstrumentDimensions::Samrat(d)) => samrat_section(&mut out, d),
            Some(InstrumentDimensions::Bhitti(d)) => bhitti_section(&mut out, d),
            Some(InstrumentDimensions::NadiValaya(d)) => nadi_valaya_section(&mut out, d),
            Some(InstrumentDimensions::Rama(d)) => rama_section(&mut out, d),
            Some(InstrumentDimensions::Digamsa(d)) => digamsa_section(&mut out, d),
            None => {
                let _ = writeln!(out, "  (not computed)");
            }
        }
        let _ = writeln!(out);
    }

    out
}

fn site_section(out: &mut String, site: &SiteConstants) {
    let _ = writeln!(out, "Site:");
    let _ = writeln!(out, "  Co-latitude:    {}", dms(site.colatitude_deg));
    let _ = writeln!(out, "  Pole altitude:  {}", dms(site.pole_altitude_deg));
    let _ = writeln!(out, "  Pala-bha:       {:.4}", site.pala_bha);
    let _ = writeln!(out);
}

fn calibration_section(out: &mut String, cal: &TimeCalibration) {
    let _ = writeln!(out, "Time Calibration:");
    let _ = writeln!(
        out,
        "  Longitude {:.4}° E vs meridian {:.2}° E",
        cal.longitude_deg, cal.reference_meridian_deg
    );
    let _ = writeln!(out, "  Local mean time is {}", cal.clock_offset);
    let _ = writeln!(out, "  Equation of time:");
    for point in &cal.equation_of_time {
        let _ = writeln!(out, "    {}  {:+.1} min", point.date, point.minutes);
    }
    let _ = writeln!(out);
}

fn samrat_section(out: &mut String, d: &SamratDimensions) {
    let _ = writeln!(out, "  Gnomon angle:     {}", dms(d.gnomon_angle_deg));
    let _ = writeln!(out, "  Hypotenuse:       {:.4}", d.hypotenuse_length);
    let _ = writeln!(out, "  Gnomon height:    {:.4}", d.gnomon_height);
    let _ = writeln!(out, "  Gnomon base:      {:.4}", d.gnomon_base_length);
    let _ = writeln!(out, "  Quadrant radius:  {:.4}", d.quadrant_radius);
    let _ = writeln!(out, "  Hour lines:");
    for line in &d.hour_lines {
        let _ = writeln!(
            out,
            "    {:+3}h  H = {:+6.1}°  line at {}",
            line.hour,
            line.hour_angle_deg,
            dms(line.graduation_angle_deg)
        );
    }
    let _ = writeln!(out, "  Declination scale (±δ along gnomon edge):");
    for mark in &d.declination_marks {
        let _ = writeln!(out, "    δ = {:5.2}°  at {:.4}", mark.declination_deg, mark.distance_from_centre);
    }
}

fn bhitti_section(out: &mut String, d: &BhittiDimensions) {
    let _ = writeln!(out, "  Arc radius:       {:.4}", d.arc_radius);
    let _ = writeln!(out, "  Quadrant arc:     {:.4}", d.quadrant_arc_length);
    let _ = writeln!(
        out,
        "  Graduations:      {} marks, every {}°",
        d.graduations_deg.len(),
        d.graduation_step_deg
    );
    let _ = writeln!(out, "  Reference marks:");
    for mark in &d.reference_marks {
        let _ = writeln!(
            out,
            "    {:<18} z = {} {:?}",
            mark.kind.label(),
            dms(mark.zenith_distance_deg),
            mark.side
        );
    }
}

fn nadi_valaya_section(out: &mut String, d: &NadiValayaDimensions) {
    let _ = writeln!(out, "  Ring tilt:        {}", dms(d.ring_tilt_deg));
    let _ = writeln!(out, "  Ring radius:      {:.4}", d.ring_radius);
    let _ = writeln!(out, "  Hour spacing:     {:.4} along the rim", d.hour_arc_length);
    let _ = writeln!(out, "  Hour marks (north / south face):");
    for (north, south) in d.north_face.hour_marks.iter().zip(&d.south_face.hour_marks) {
        let _ = writeln!(
            out,
            "    {:+3}h  {:6.1}°  {:6.1}°",
            north.hour, north.position_angle_deg, south.position_angle_deg
        );
    }
}

fn rama_section(out: &mut String, d: &RamaDimensions) {
    let _ = writeln!(out, "  Cylinder radius:  {:.4}", d.cylinder_radius);
    let _ = writeln!(out, "  Wall height:      {:.4}", d.cylinder_height);
    let _ = writeln!(out, "  Pillar height:    {:.4}", d.pillar_height);
    let _ = writeln!(
        out,
        "  Sectors:          {} of {}° ({:.4} along the wall)",
        d.sector_count, d.azimuth_step_deg, d.sector_arc_length
    );
    let _ = writeln!(out, "  Altitude scale:");
    for mark in &d.altitude_marks {
        let surface = match mark.surface {
            ScaleSurface::Wall => "wall, down from top",
            ScaleSurface::Floor => "floor, out from pillar",
        };
        let _ = writeln!(out, "    {:4.1}°  {:.4} ({})", mark.altitude_deg, mark.distance, surface);
    }
}

fn digamsa_section(out: &mut String, d: &DigamsaDimensions) {
    let _ = writeln!(out, "  Outer ring radius: {:.4}", d.outer_ring_radius);
    let _ = writeln!(out, "  Inner ring radius: {:.4}", d.inner_ring_radius);
    let _ = writeln!(out, "  Platform diameter: {:.4}", d.platform_diameter);
    let _ = writeln!(out, "  Pillar height:     {:.4}", d.pillar_height);
    let _ = writeln!(
        out,
        "  Azimuth circle:    {} marks, every {}° ({:.4} apart)",
        d.azimuth_graduations_deg.len(),
        d.azimuth_step_deg,
        d.graduation_arc_length
    );
}
