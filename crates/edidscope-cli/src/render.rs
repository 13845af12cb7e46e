//! Plain-text rendering of a decoded report.

use std::fmt::{self, Write};
use std::ops::Range;

use edidscope_core::edid::layout;
use edidscope_core::{
    Chromaticity, CvtSupport, Descriptor, DetailedTiming, DisplayDescriptor, Edid, Features,
    RangeLimits, RangeTiming, Report, SyncType, VideoInput,
};

pub fn render_text(report: &Report) -> Result<String, fmt::Error> {
    let mut out = String::new();
    let edid = &report.edid;

    writeln!(
        out,
        "EDID base block: {} ({}, {} bytes)",
        report.input.path,
        report.input.format.as_str(),
        report.input.bytes
    )?;
    if report.input.extension_bytes_ignored > 0 {
        writeln!(
            out,
            "  {} extension bytes not decoded",
            report.input.extension_bytes_ignored
        )?;
    }
    render_header(&mut out, edid)?;
    render_vendor(&mut out, edid)?;
    render_basic_params(&mut out, edid)?;
    render_features(&mut out, edid)?;
    render_chromaticity(&mut out, edid)?;
    render_timings(&mut out, edid)?;
    for (index, descriptor) in edid.descriptors.iter().enumerate() {
        render_descriptor(&mut out, index + 1, descriptor)?;
        if let Some(range) = layout::DESCRIPTOR_RANGES.get(index) {
            writeln!(out, "  raw: {}", raw_chunk(edid, range.clone()))?;
        }
    }
    writeln!(
        out,
        "Extension blocks: {} [{}]",
        edid.extension_count,
        raw_chunk(edid, offset_range(layout::EXTENSION_COUNT_OFFSET))
    )?;
    writeln!(out, "Checksum: 0x{:02X}", edid.checksum)?;
    Ok(out)
}

fn render_header(out: &mut String, edid: &Edid) -> fmt::Result {
    let state = if edid.header.valid { "valid" } else { "INVALID" };
    writeln!(out, "Header: {} ({})", state, hex_bytes(&edid.header.bytes))
}

fn render_vendor(out: &mut String, edid: &Edid) -> fmt::Result {
    writeln!(out, "Vendor & product")?;
    writeln!(
        out,
        "  Manufacturer: {} [{}]",
        edid.manufacturer_id,
        raw_chunk(edid, layout::MANUFACTURER_ID_RANGE)
    )?;
    writeln!(
        out,
        "  Product code: 0x{:04X} ({}) [{}]",
        edid.product_code,
        edid.product_code,
        raw_chunk(edid, layout::PRODUCT_CODE_RANGE)
    )?;
    writeln!(
        out,
        "  Serial number: {} [{}]",
        edid.serial_number,
        raw_chunk(edid, layout::SERIAL_NUMBER_RANGE)
    )?;
    let date = edid
        .manufacture_date
        .as_ref()
        .map(|date| format!(" ({date})"))
        .unwrap_or_default();
    writeln!(
        out,
        "  Manufactured: week {} of {}{} [{}]",
        edid.manufacture_week,
        edid.manufacture_year,
        date,
        raw_chunk(
            edid,
            layout::MANUFACTURE_WEEK_OFFSET..layout::MANUFACTURE_YEAR_OFFSET + 1
        )
    )?;
    writeln!(
        out,
        "  EDID version: {}.{} [{}]",
        edid.version.major,
        edid.version.minor,
        raw_chunk(edid, layout::VERSION_RANGE)
    )
}

fn render_basic_params(out: &mut String, edid: &Edid) -> fmt::Result {
    writeln!(
        out,
        "Basic display parameters [{}]",
        raw_chunk(edid, layout::INPUT_PARAMS_OFFSET..layout::FEATURES_OFFSET)
    )?;
    match &edid.input {
        VideoInput::Digital(digital) => writeln!(
            out,
            "  Input: digital, {} bits per color, {}",
            digital.bits_per_color,
            digital.interface.label()
        )?,
        VideoInput::Analog(analog) => {
            writeln!(out, "  Input: analog, {}", analog.signal_level.label())?;
            writeln!(
                out,
                "    blank-to-black setup: {}, separate sync: {}, composite sync: {}, sync on green: {}, serrated vsync: {}",
                yes_no(analog.blank_to_black_setup),
                yes_no(analog.separate_sync),
                yes_no(analog.composite_sync),
                yes_no(analog.sync_on_green),
                yes_no(analog.vsync_serrated)
            )?;
        }
    }
    if edid.h_size_cm == 0 || edid.v_size_cm == 0 {
        writeln!(out, "  Screen size: undefined")?;
    } else {
        writeln!(
            out,
            "  Screen size: {} x {} cm",
            edid.h_size_cm, edid.v_size_cm
        )?;
    }
    writeln!(out, "  Gamma: {:.2}", edid.gamma)
}

fn render_features(out: &mut String, edid: &Edid) -> fmt::Result {
    let features: &Features = &edid.features;
    writeln!(
        out,
        "Features [{}]",
        raw_chunk(edid, offset_range(layout::FEATURES_OFFSET))
    )?;
    let dpms: Vec<&str> = [
        (features.dpms_standby, "standby"),
        (features.dpms_suspend, "suspend"),
        (features.dpms_active_off, "active off"),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, name)| *name)
    .collect();
    if dpms.is_empty() {
        writeln!(out, "  DPMS: none")?;
    } else {
        writeln!(out, "  DPMS: {}", dpms.join(", "))?;
    }
    writeln!(out, "  Color encoding: {}", features.color_encoding.label())?;
    writeln!(out, "  sRGB default: {}", yes_no(features.srgb_default))?;
    writeln!(
        out,
        "  Preferred timing in first descriptor: {}",
        yes_no(features.preferred_timing_in_first_descriptor)
    )?;
    writeln!(
        out,
        "  Continuous timings: {}",
        yes_no(features.continuous_timings)
    )
}

fn render_chromaticity(out: &mut String, edid: &Edid) -> fmt::Result {
    let chroma: &Chromaticity = &edid.chromaticity;
    writeln!(
        out,
        "Chromaticity [{}]",
        raw_chunk(edid, layout::CHROMATICITY_RANGE)
    )?;
    for (name, point) in [
        ("Red", chroma.red),
        ("Green", chroma.green),
        ("Blue", chroma.blue),
        ("White", chroma.white),
    ] {
        writeln!(out, "  {:<6} x={:.4} y={:.4}", name, point.x, point.y)?;
    }
    Ok(())
}

fn render_timings(out: &mut String, edid: &Edid) -> fmt::Result {
    writeln!(
        out,
        "Established timings ({}) [{}]",
        edid.established_timings.len(),
        raw_chunk(edid, layout::ESTABLISHED_TIMINGS_RANGE)
    )?;
    for mode in &edid.established_timings {
        writeln!(
            out,
            "  {}x{}@{}Hz",
            mode.width, mode.height, mode.refresh_hz
        )?;
    }
    if edid.manufacturer_timings != 0 {
        writeln!(
            out,
            "  Manufacturer timings: 0x{:02X}",
            edid.manufacturer_timings
        )?;
    }
    writeln!(
        out,
        "Standard timings ({}) [{}]",
        edid.standard_timings.len(),
        raw_chunk(edid, layout::STANDARD_TIMINGS_RANGE)
    )?;
    for mode in &edid.standard_timings {
        writeln!(
            out,
            "  {}x{}@{}Hz ({})",
            mode.width,
            mode.height,
            mode.refresh_hz,
            mode.aspect_ratio.label()
        )?;
    }
    Ok(())
}

fn render_descriptor(out: &mut String, slot: usize, descriptor: &Descriptor) -> fmt::Result {
    match descriptor {
        Descriptor::DetailedTiming(timing) => {
            writeln!(out, "Descriptor {slot}: detailed timing")?;
            render_detailed_timing(out, timing)
        }
        Descriptor::Display(DisplayDescriptor::SerialNumber { text }) => {
            writeln!(out, "Descriptor {slot}: serial number \"{text}\"")
        }
        Descriptor::Display(DisplayDescriptor::UnspecifiedText { text }) => {
            writeln!(out, "Descriptor {slot}: text \"{text}\"")
        }
        Descriptor::Display(DisplayDescriptor::DisplayName { text }) => {
            writeln!(out, "Descriptor {slot}: display name \"{text}\"")
        }
        Descriptor::Display(DisplayDescriptor::RangeLimits(limits)) => {
            writeln!(out, "Descriptor {slot}: range limits")?;
            render_range_limits(out, limits)
        }
        Descriptor::Display(DisplayDescriptor::Unknown { tag, .. }) => {
            writeln!(out, "Descriptor {slot}: unknown tag 0x{tag:02X}")
        }
    }
}

fn render_detailed_timing(out: &mut String, timing: &DetailedTiming) -> fmt::Result {
    writeln!(out, "  Pixel clock: {:.2} MHz", timing.pixel_clock_mhz)?;
    writeln!(
        out,
        "  Horizontal: {} active, {} blank ({} total), front porch {}, sync {}, border {} ({} total)",
        timing.h_active,
        timing.h_blank,
        timing.h_total(),
        timing.h_front_porch,
        timing.h_sync_pulse,
        timing.h_border,
        2 * u16::from(timing.h_border)
    )?;
    writeln!(
        out,
        "  Vertical: {} active, {} blank ({} total), front porch {}, sync {}, border {} ({} total)",
        timing.v_active,
        timing.v_blank,
        timing.v_total(),
        timing.v_front_porch,
        timing.v_sync_pulse,
        timing.v_border,
        2 * u16::from(timing.v_border)
    )?;
    if let Some(refresh) = timing.refresh_hz() {
        writeln!(out, "  Refresh: {refresh:.2} Hz")?;
    }
    writeln!(
        out,
        "  Image size: {} x {} mm",
        timing.h_size_mm, timing.v_size_mm
    )?;
    let features = &timing.features;
    writeln!(
        out,
        "  Flags: 0x{:02X}, interlaced: {}, stereo: {}",
        features.raw,
        yes_no(features.interlaced),
        features.stereo.label()
    )?;
    let sync = match features.sync {
        SyncType::AnalogComposite {
            bipolar,
            serrated,
            sync_on_all_lines,
        } => format!(
            "analog composite, bipolar: {}, serrated: {}, on all RGB lines: {}",
            yes_no(bipolar),
            yes_no(serrated),
            yes_no(sync_on_all_lines)
        ),
        SyncType::DigitalComposite {
            serrated,
            hsync_positive,
        } => format!(
            "digital composite, serrated: {}, hsync {}",
            yes_no(serrated),
            polarity(hsync_positive)
        ),
        SyncType::DigitalSeparate {
            vsync_positive,
            hsync_positive,
        } => format!(
            "digital separate, vsync {}, hsync {}",
            polarity(vsync_positive),
            polarity(hsync_positive)
        ),
    };
    writeln!(out, "  Sync: {sync}")
}

fn render_range_limits(out: &mut String, limits: &RangeLimits) -> fmt::Result {
    writeln!(
        out,
        "  Vertical: {}-{} Hz",
        limits.v_min_hz, limits.v_max_hz
    )?;
    writeln!(
        out,
        "  Horizontal: {}-{} kHz",
        limits.h_min_khz, limits.h_max_khz
    )?;
    writeln!(out, "  Max pixel clock: {} MHz", limits.max_pixel_clock_mhz)?;
    match &limits.timing {
        RangeTiming::DefaultGtf => writeln!(out, "  Timing: default GTF"),
        RangeTiming::NoTimingInfo => writeln!(out, "  Timing: range limits only"),
        RangeTiming::SecondaryGtf(gtf) => writeln!(
            out,
            "  Timing: secondary GTF from {} kHz, C={} M={} K={} J={}",
            gtf.start_frequency_khz, gtf.c, gtf.m, gtf.k, gtf.j
        ),
        RangeTiming::Cvt(cvt) => render_cvt(out, cvt),
        RangeTiming::Reserved { code } => writeln!(out, "  Timing: reserved (0x{code:02X})"),
    }
}

fn render_cvt(out: &mut String, cvt: &CvtSupport) -> fmt::Result {
    writeln!(
        out,
        "  Timing: CVT {}.{}, pixel clock adjust -{:.2} MHz",
        cvt.version_major, cvt.version_minor, cvt.pixel_clock_adjust_mhz
    )?;
    if let Some(max) = cvt.max_active_pixels {
        writeln!(out, "    Max active pixels per line: {max}")?;
    }
    let ratios: Vec<String> = cvt
        .supported_aspect_ratios
        .iter()
        .map(|ratio| ratio.label())
        .collect();
    writeln!(
        out,
        "    Aspect ratios: {} (preferred {})",
        ratios.join(", "),
        cvt.preferred_aspect_ratio.label()
    )?;
    writeln!(
        out,
        "    Reduced blanking: {}, standard blanking: {}",
        yes_no(cvt.reduced_blanking),
        yes_no(cvt.standard_blanking)
    )?;
    let scaling: Vec<&str> = cvt.scaling.iter().map(|s| s.label()).collect();
    if !scaling.is_empty() {
        writeln!(out, "    Scaling: {}", scaling.join(", "))?;
    }
    writeln!(out, "    Preferred refresh: {} Hz", cvt.preferred_refresh_hz)
}

/// Raw input bytes behind a decoded field.
fn raw_chunk(edid: &Edid, range: Range<usize>) -> String {
    hex_bytes(edid.raw.get(range).unwrap_or_default())
}

fn offset_range(offset: usize) -> Range<usize> {
    offset..offset + 1
}

fn hex_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn polarity(positive: bool) -> &'static str {
    if positive { "+" } else { "-" }
}
