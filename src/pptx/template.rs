//! Presentation template parts.
//!
//! Provides the slide master, the two built-in slide layouts, the theme and
//! the small presentation-level property parts every `.pptx` package needs.
//! Placeholder geometry follows the classic 10" x 7.5" Office template and is
//! scaled to the deck's slide size.

use super::constants::{PML_NAMESPACES, XML_DECLARATION, namespace};
use crate::common::Emu;
use crate::deck::{PlaceholderKind, SlideLayout, clamp_slide_extent};
use std::fmt::Write as FmtWrite;

const BASE_WIDTH: i64 = 9_144_000;
const BASE_HEIGHT: i64 = 6_858_000;

/// First id in `p:sldLayoutIdLst`; must be above the master's id.
pub const FIRST_LAYOUT_ID: u32 = 2_147_483_649;
/// Id of the single slide master in `p:sldMasterIdLst`.
pub const MASTER_ID: u32 = 2_147_483_648;

/// A placeholder's position and extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

/// Slide dimensions used to scale placeholder geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    width: i64,
    height: i64,
}

impl Geometry {
    pub fn new(width: Emu, height: Emu) -> Self {
        Self {
            width: clamp_slide_extent(width).get(),
            height: clamp_slide_extent(height).get(),
        }
    }

    /// Placeholder rectangle on this slide size.
    pub fn placeholder(&self, kind: PlaceholderKind) -> Rect {
        let base = match kind {
            PlaceholderKind::CenteredTitle => Rect { x: 685_800, y: 2_130_425, cx: 7_772_400, cy: 1_470_025 },
            PlaceholderKind::Subtitle => Rect { x: 1_371_600, y: 3_886_200, cx: 6_400_800, cy: 1_752_600 },
            PlaceholderKind::Title => Rect { x: 457_200, y: 274_638, cx: 8_229_600, cy: 1_143_000 },
            PlaceholderKind::Body => Rect { x: 457_200, y: 1_600_200, cx: 8_229_600, cy: 4_525_963 },
        };
        Rect {
            x: scale(base.x, self.width, BASE_WIDTH),
            y: scale(base.y, self.height, BASE_HEIGHT),
            cx: scale(base.cx, self.width, BASE_WIDTH),
            cy: scale(base.cy, self.height, BASE_HEIGHT),
        }
    }

    /// `p:sldSz/@type` for sizes PowerPoint names, if any.
    pub fn size_type(&self) -> Option<&'static str> {
        match (self.width, self.height) {
            (9_144_000, 6_858_000) => Some("screen4x3"),
            (9_144_000, 5_143_500) => Some("screen16x9"),
            (9_144_000, 5_715_000) => Some("screen16x10"),
            _ => None,
        }
    }

    /// Name written to `docProps/app.xml`.
    pub fn format_name(&self) -> &'static str {
        match self.size_type() {
            Some("screen4x3") => "On-screen Show (4:3)",
            Some("screen16x9") => "On-screen Show (16:9)",
            Some("screen16x10") => "On-screen Show (16:10)",
            _ if self.width as i128 * 9 == self.height as i128 * 16 => "Widescreen",
            _ => "Custom",
        }
    }
}

#[inline]
fn scale(value: i64, actual: i64, base: i64) -> i64 {
    ((value as i128 * actual as i128) / base as i128) as i64
}

fn write_xfrm(xml: &mut String, rect: Rect) {
    let _ = write!(
        xml,
        r#"<a:xfrm><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        rect.x, rect.y, rect.cx, rect.cy
    );
}

fn write_group_props(xml: &mut String) {
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(concat!(
        "<p:grpSpPr><a:xfrm>",
        r#"<a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/>"#,
        "</a:xfrm></p:grpSpPr>"
    ));
}

/// Write the `p:ph` element for a placeholder kind.
pub(crate) fn write_ph(xml: &mut String, kind: PlaceholderKind) {
    xml.push_str("<p:ph");
    if let Some(ph_type) = kind.ph_type() {
        let _ = write!(xml, r#" type="{ph_type}""#);
    }
    if let Some(idx) = kind.ph_idx() {
        let _ = write!(xml, r#" idx="{idx}""#);
    }
    xml.push_str("/>");
}

/// Default shape name for a placeholder, as PowerPoint numbers them.
pub(crate) fn placeholder_name(kind: PlaceholderKind, shape_id: u32) -> String {
    let base = match kind {
        PlaceholderKind::CenteredTitle | PlaceholderKind::Title => "Title",
        PlaceholderKind::Subtitle => "Subtitle",
        PlaceholderKind::Body => "Content Placeholder",
    };
    format!("{} {}", base, shape_id - 1)
}

/// Write a master or layout placeholder shape with prompt text.
fn write_template_placeholder(
    xml: &mut String,
    shape_id: u32,
    name: &str,
    kind: PlaceholderKind,
    rect: Option<Rect>,
    list_style: &str,
    prompt: &str,
) {
    xml.push_str("<p:sp><p:nvSpPr>");
    let _ = write!(xml, r#"<p:cNvPr id="{shape_id}" name="{name}"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr>"#);
    write_ph(xml, kind);
    xml.push_str("</p:nvPr></p:nvSpPr>");
    match rect {
        Some(rect) => {
            xml.push_str("<p:spPr>");
            write_xfrm(xml, rect);
            xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#);
        },
        None => xml.push_str("<p:spPr/>"),
    }
    let _ = write!(
        xml,
        r#"<p:txBody><a:bodyPr/><a:lstStyle>{list_style}</a:lstStyle><a:p><a:r><a:rPr lang="en-US"/><a:t>{prompt}</a:t></a:r><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#
    );
}

/// `ppt/slideMasters/slideMaster1.xml`.
///
/// Lists every built-in layout; `layout_rel_ids` are the master's rIds for
/// them, in [`SlideLayout::ALL`] order.
pub fn slide_master_xml(geometry: &Geometry, layout_rel_ids: &[String]) -> String {
    let mut xml = String::with_capacity(8192);
    xml.push_str(XML_DECLARATION);
    let _ = write!(xml, "<p:sldMaster {PML_NAMESPACES}>");
    xml.push_str(r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg><p:spTree>"#);
    write_group_props(&mut xml);

    let title = geometry.placeholder(PlaceholderKind::Title);
    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="2" name="Title Placeholder 1"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr><p:spPr>"#);
    write_xfrm(&mut xml, title);
    xml.push_str(concat!(
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0" anchor="ctr"><a:normAutofit/></a:bodyPr>"#,
        r#"<a:lstStyle/><a:p><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master title style</a:t></a:r><a:endParaRPr lang="en-US"/></a:p></p:txBody></p:sp>"#
    ));

    let body = geometry.placeholder(PlaceholderKind::Body);
    xml.push_str("<p:sp><p:nvSpPr>");
    xml.push_str(r#"<p:cNvPr id="3" name="Text Placeholder 2"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="body" idx="1"/></p:nvPr></p:nvSpPr><p:spPr>"#);
    write_xfrm(&mut xml, body);
    xml.push_str(concat!(
        r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
        r#"<p:txBody><a:bodyPr vert="horz" lIns="91440" tIns="45720" rIns="91440" bIns="45720" rtlCol="0"><a:normAutofit/></a:bodyPr><a:lstStyle/>"#,
        r#"<a:p><a:pPr lvl="0"/><a:r><a:rPr lang="en-US"/><a:t>Click to edit Master text styles</a:t></a:r></a:p>"#,
        r#"<a:p><a:pPr lvl="1"/><a:r><a:rPr lang="en-US"/><a:t>Second level</a:t></a:r><a:endParaRPr lang="en-US"/></a:p>"#,
        "</p:txBody></p:sp>"
    ));

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str(concat!(
        r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" "#,
        r#"accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#
    ));

    xml.push_str("<p:sldLayoutIdLst>");
    for (i, r_id) in layout_rel_ids.iter().enumerate() {
        let _ = write!(
            xml,
            r#"<p:sldLayoutId id="{}" r:id="{}"/>"#,
            FIRST_LAYOUT_ID + i as u32,
            r_id
        );
    }
    xml.push_str("</p:sldLayoutIdLst>");

    xml.push_str("<p:txStyles>");
    xml.push_str(concat!(
        "<p:titleStyle>",
        r#"<a:lvl1pPr algn="ctr" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1"><a:spcBef><a:spcPct val="0"/></a:spcBef><a:buNone/>"#,
        r#"<a:defRPr sz="4400" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mj-lt"/><a:ea typeface="+mj-ea"/><a:cs typeface="+mj-cs"/></a:defRPr></a:lvl1pPr>"#,
        "</p:titleStyle>"
    ));
    xml.push_str("<p:bodyStyle>");
    for (level, (mar_l, size, bullet)) in [
        (342_900, 3200, "&#8226;"),
        (742_950, 2800, "&#8211;"),
        (1_143_000, 2400, "&#8226;"),
    ]
    .into_iter()
    .enumerate()
    {
        let indent = if level == 0 { -342_900 } else { -285_750 };
        let _ = write!(
            xml,
            concat!(
                r#"<a:lvl{lvl}pPr marL="{marl}" indent="{indent}" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
                r#"<a:spcBef><a:spcPct val="20000"/></a:spcBef><a:buFont typeface="Arial"/><a:buChar char="{bullet}"/>"#,
                r#"<a:defRPr sz="{size}" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl{lvl}pPr>"#
            ),
            lvl = level + 1,
            marl = mar_l,
            indent = indent,
            bullet = bullet,
            size = size
        );
    }
    xml.push_str("</p:bodyStyle>");
    xml.push_str(concat!(
        "<p:otherStyle><a:defPPr><a:defRPr lang=\"en-US\"/></a:defPPr>",
        r#"<a:lvl1pPr marL="0" algn="l" defTabSz="914400" rtl="0" eaLnBrk="1" latinLnBrk="0" hangingPunct="1">"#,
        r#"<a:defRPr sz="1800" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill><a:latin typeface="+mn-lt"/><a:ea typeface="+mn-ea"/><a:cs typeface="+mn-cs"/></a:defRPr></a:lvl1pPr>"#,
        "</p:otherStyle>"
    ));
    xml.push_str("</p:txStyles></p:sldMaster>");
    xml
}

/// `ppt/slideLayouts/slideLayoutN.xml` for a built-in layout.
pub fn slide_layout_xml(layout: SlideLayout, geometry: &Geometry) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(XML_DECLARATION);
    let _ = write!(
        xml,
        r#"<p:sldLayout {PML_NAMESPACES} type="{}" preserve="1">"#,
        layout.layout_type()
    );
    let _ = write!(xml, r#"<p:cSld name="{}"><p:spTree>"#, layout.name());
    write_group_props(&mut xml);

    match layout {
        SlideLayout::TitleSlide => {
            write_template_placeholder(
                &mut xml,
                2,
                "Title 1",
                PlaceholderKind::CenteredTitle,
                Some(geometry.placeholder(PlaceholderKind::CenteredTitle)),
                "",
                "Click to edit Master title style",
            );
            write_template_placeholder(
                &mut xml,
                3,
                "Subtitle 2",
                PlaceholderKind::Subtitle,
                Some(geometry.placeholder(PlaceholderKind::Subtitle)),
                concat!(
                    r#"<a:lvl1pPr marL="0" indent="0" algn="ctr"><a:buNone/>"#,
                    r#"<a:defRPr><a:solidFill><a:schemeClr val="tx1"><a:tint val="75000"/></a:schemeClr></a:solidFill></a:defRPr></a:lvl1pPr>"#
                ),
                "Click to edit Master subtitle style",
            );
        },
        SlideLayout::TitleAndContent => {
            write_template_placeholder(
                &mut xml,
                2,
                "Title 1",
                PlaceholderKind::Title,
                None,
                "",
                "Click to edit Master title style",
            );
            write_template_placeholder(
                &mut xml,
                3,
                "Content Placeholder 2",
                PlaceholderKind::Body,
                None,
                "",
                "Click to edit Master text styles",
            );
        },
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sldLayout>");
    xml
}

/// `ppt/theme/theme1.xml`: the stock Office color, font and format schemes.
pub fn theme_xml() -> String {
    let mut xml = String::with_capacity(6144);
    xml.push_str(XML_DECLARATION);
    let _ = write!(xml, r#"<a:theme xmlns:a="{}" name="Office Theme">"#, namespace::A);
    xml.push_str("<a:themeElements>");

    xml.push_str(r#"<a:clrScheme name="Office">"#);
    xml.push_str(r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#);
    xml.push_str(r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#);
    for (name, rgb) in [
        ("dk2", "1F497D"),
        ("lt2", "EEECE1"),
        ("accent1", "4F81BD"),
        ("accent2", "C0504D"),
        ("accent3", "9BBB59"),
        ("accent4", "8064A2"),
        ("accent5", "4BACC6"),
        ("accent6", "F79646"),
        ("hlink", "0000FF"),
        ("folHlink", "800080"),
    ] {
        let _ = write!(xml, r#"<a:{name}><a:srgbClr val="{rgb}"/></a:{name}>"#);
    }
    xml.push_str("</a:clrScheme>");

    xml.push_str(concat!(
        r#"<a:fontScheme name="Office">"#,
        r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
        r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
        "</a:fontScheme>"
    ));

    xml.push_str(r#"<a:fmtScheme name="Office">"#);
    xml.push_str("<a:fillStyleLst>");
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    write_gradient_fill(&mut xml, [(0, 50_000, 300_000), (35_000, 37_000, 300_000), (100_000, 15_000, 350_000)]);
    write_gradient_fill(&mut xml, [(0, 100_000, 130_000), (80_000, 100_000, 130_000), (100_000, 100_000, 135_000)]);
    xml.push_str("</a:fillStyleLst>");

    xml.push_str("<a:lnStyleLst>");
    for width in [9525, 25400, 38100] {
        let _ = write!(
            xml,
            r#"<a:ln w="{width}" cap="flat" cmpd="sng" algn="ctr"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill><a:prstDash val="solid"/></a:ln>"#
        );
    }
    xml.push_str("</a:lnStyleLst>");

    xml.push_str("<a:effectStyleLst>");
    for _ in 0..3 {
        xml.push_str("<a:effectStyle><a:effectLst/></a:effectStyle>");
    }
    xml.push_str("</a:effectStyleLst>");

    xml.push_str("<a:bgFillStyleLst>");
    xml.push_str(r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#);
    write_gradient_fill(&mut xml, [(0, 40_000, 350_000), (40_000, 45_000, 350_000), (100_000, 20_000, 255_000)]);
    write_gradient_fill(&mut xml, [(0, 80_000, 300_000), (50_000, 30_000, 200_000), (100_000, 20_000, 255_000)]);
    xml.push_str("</a:bgFillStyleLst>");
    xml.push_str("</a:fmtScheme>");

    xml.push_str("</a:themeElements><a:objectDefaults/><a:extraClrSchemeLst/></a:theme>");
    xml
}

/// A three-stop tinted gradient of the placeholder color.
fn write_gradient_fill(xml: &mut String, stops: [(u32, u32, u32); 3]) {
    xml.push_str(r#"<a:gradFill rotWithShape="1"><a:gsLst>"#);
    for (pos, tint, sat_mod) in stops {
        let _ = write!(
            xml,
            r#"<a:gs pos="{pos}"><a:schemeClr val="phClr"><a:tint val="{tint}"/><a:satMod val="{sat_mod}"/></a:schemeClr></a:gs>"#
        );
    }
    xml.push_str(r#"</a:gsLst><a:lin ang="16200000" scaled="1"/></a:gradFill>"#);
}

/// `ppt/presProps.xml`.
pub fn pres_props_xml() -> String {
    format!("{XML_DECLARATION}<p:presentationPr {PML_NAMESPACES}/>")
}

/// `ppt/viewProps.xml`.
pub fn view_props_xml() -> String {
    format!(
        concat!(
            "{}<p:viewPr {}>",
            r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
            r#"<p:gridSpacing cx="76200" cy="76200"/></p:viewPr>"#
        ),
        XML_DECLARATION, PML_NAMESPACES
    )
}

/// `ppt/tableStyles.xml`: no custom styles, Office default selected.
pub fn table_styles_xml() -> String {
    format!(
        r#"{}<a:tblStyleLst xmlns:a="{}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#,
        XML_DECLARATION,
        namespace::A
    )
}
