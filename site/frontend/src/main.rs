use std::cell::RefCell;
use std::rc::Rc;

use folio::content::{
    AREAS_OF_EXPERTISE, CONTACT_EMAIL, NAV_LINKS, PROJECTS, Project, Publication, PublicationKind,
    SOCIAL_LINKS, SkillCategory, featured_projects, publications_of, skills_in,
};
use folio::disclaimer::{DisclaimerBanner, DisclaimerVariant, RandomPicker};
use folio::menu::{MobileMenu, TocDrawer};
use folio::platform::browser::{BrowserDocument, BrowserNavigation, ConsoleLogger, SectionTracker};
use folio::sections::{TocEntry, toc_entries};
use folio::zoon::*;
use folio::{LinkOrigin, Page, SiteConfig};

const ACCENT: &str = "#2563eb";
const HEADER_HEIGHT: u32 = 64;

fn main() {
    ConsoleLogger::install(log::LevelFilter::Info);
    start_app("app", Site::new);
}

#[derive(Clone)]
struct Site {
    config: Rc<SiteConfig>,
    navigation: BrowserNavigation,
    menu: Mutable<MobileMenu>,
}

impl Site {
    fn new() -> impl Element {
        let config = SiteConfig::default();
        let navigation = BrowserNavigation::start(&config);
        let menu = Mutable::new(MobileMenu::new(config.mobile_breakpoint_px));
        Self {
            config: Rc::new(config),
            navigation,
            menu,
        }
        .root()
    }

    fn root(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Font::new().color(color!("#1f2937")).family([FontFamily::SansSerif]))
            .on_viewport_size_change({
                let site = self.clone();
                move |width, _| site.update_menu(|menu| {
                    menu.on_resize(width);
                })
            })
            .item(self.header())
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Padding::new().top(HEADER_HEIGHT))
                    .child_signal(self.navigation.page().signal().map({
                        let site = self.clone();
                        move |page| site.page(page)
                    })),
            )
            .item(self.footer())
    }

    fn page(&self, page: Page) -> RawElOrText {
        match page {
            Page::Home => self.home().unify(),
            Page::AllProjects => self.all_projects().unify(),
            Page::Publications => self.publications().unify(),
            Page::NotFound => self.not_found().unify(),
            article => Article::new(self.clone(), article).root().unify(),
        }
    }

    fn update_menu(&self, update: impl FnOnce(&mut MobileMenu)) {
        let mut menu = self.menu.get();
        update(&mut menu);
        self.menu.set_neq(menu);
        BrowserDocument.lock_body_scroll(menu.locks_body_scroll());
    }

    /// Anchor resolved by the router instead of the browser.
    fn link(&self, label: impl Into<String>, href: &'static str, origin: LinkOrigin) -> impl Element + use<> {
        let navigation = self.navigation.clone();
        let site = self.clone();
        Link::new()
            .s(Font::new().color(color!(ACCENT)))
            .label(label.into())
            .to(href)
            .update_raw_el(move |raw_el| {
                raw_el.event_handler_with_options(
                    EventOptions::new().preventable(),
                    move |event: events::Click| {
                        event.prevent_default();
                        if origin == LinkOrigin::SiteNav {
                            site.update_menu(MobileMenu::follow_link);
                        }
                        navigation.follow(href, origin);
                    },
                )
            })
    }

    fn header(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .s(Background::new().color(color!("rgba(255, 255, 255, 0.95)")))
            .s(Shadows::new([Shadow::new().y(1).blur(4).color(color!("rgba(0, 0, 0, 0.08)"))]))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("top", "0")
                    .style("z-index", "50")
            })
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Height::exact(HEADER_HEIGHT))
                    .s(Padding::new().x(24))
                    .s(Align::new().center_y())
                    .item(
                        El::new()
                            .s(Font::new().size(18).weight(FontWeight::Bold))
                            .child(self.config.base_title.clone()),
                    )
                    .item(El::new().s(Width::fill()))
                    .item(
                        Row::new()
                            .s(Gap::new().x(20))
                            .items(NAV_LINKS.iter().map(|link| self.link(link.label, link.href, LinkOrigin::SiteNav))),
                    )
                    .item(
                        Button::new()
                            .s(Padding::new().x(10))
                            .label_signal(self.menu.signal().map(|menu| if menu.is_open() { "Close" } else { "Menu" }))
                            .on_press({
                                let site = self.clone();
                                move || site.update_menu(MobileMenu::toggle)
                            }),
                    ),
            )
            .item_signal(self.menu.signal().map({
                let site = self.clone();
                move |menu| {
                    menu.is_open().then(|| {
                        Column::new()
                            .s(Padding::new().x(24).y(12))
                            .s(Gap::new().y(12))
                            .items(NAV_LINKS.iter().map(|link| site.link(link.label, link.href, LinkOrigin::SiteNav)))
                    })
                }
            }))
    }

    fn section(&self, id: &'static str, content: impl Element) -> impl Element + use<> {
        El::new()
            .s(Width::fill())
            .s(Padding::new().x(24).y(48))
            .update_raw_el(move |raw_el| raw_el.attr("id", id))
            .child(content)
    }

    fn heading(text: impl Into<String>, size: u32) -> impl Element {
        El::new()
            .s(Font::new().size(size).weight(FontWeight::Bold))
            .child(text.into())
    }

    fn home(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill())
            .item(self.section(
                "home",
                Column::new()
                    .s(Gap::new().y(16))
                    .item(Self::heading(Page::Home.heading(), 40))
                    .item(Paragraph::new().content(AREAS_OF_EXPERTISE.join(" · "))),
            ))
            .item(self.section(
                "projects",
                Column::new()
                    .s(Gap::new().y(16))
                    .item(Self::heading("Featured Projects", 28))
                    .items(featured_projects().iter().map(|project| self.project_card(project)))
                    .item(self.link("View all projects", "/projects", LinkOrigin::Content)),
            ))
            .item(self.section(
                "about",
                Column::new()
                    .s(Gap::new().y(12))
                    .item(Self::heading("About Me", 28))
                    .item(Self::skill_row("Technical", SkillCategory::Technical))
                    .item(Self::skill_row("Analytical", SkillCategory::Analytical))
                    .item(Self::skill_row("Soft skills", SkillCategory::Soft))
                    .item(self.link("Publications", "/publications", LinkOrigin::Content)),
            ))
            .item(self.section(
                "contact",
                Column::new()
                    .s(Gap::new().y(12))
                    .item(Self::heading("Contact", 28))
                    .item(El::new().child(CONTACT_EMAIL))
                    .item(Row::new().s(Gap::new().x(16)).items(
                        SOCIAL_LINKS
                            .iter()
                            .map(|social| Link::new().label(social.platform).to(social.url).new_tab(NewTab::new())),
                    )),
            ))
    }

    fn skill_row(label: &'static str, category: SkillCategory) -> impl Element {
        Paragraph::new()
            .content(El::new().s(Font::new().weight(FontWeight::SemiBold)).child(format!("{label}: ")))
            .content(skills_in(category).map(|skill| skill.name).collect::<Vec<_>>().join(", "))
    }

    fn project_card(&self, project: &'static Project) -> impl Element + use<> {
        Column::new()
            .s(Padding::all(16))
            .s(Gap::new().y(8))
            .s(RoundedCorners::all(12))
            .s(Borders::all(Border::new().color(color!("#e5e7eb"))))
            .item(El::new().s(Font::new().size(18).weight(FontWeight::SemiBold)).child(project.title))
            .item(Paragraph::new().content(project.description))
            .item(El::new().s(Font::new().size(12).color(color!("#6b7280"))).child(project.tags.join(" · ")))
            .item(self.link("Read more", project.link, LinkOrigin::Content))
    }

    fn all_projects(&self) -> impl Element + use<> {
        Column::new()
            .s(Padding::new().x(24).y(32))
            .s(Gap::new().y(16))
            .item(self.link("← Back to Projects", "/#projects", LinkOrigin::Content))
            .item(Self::heading(Page::AllProjects.heading(), 32))
            .items(PROJECTS.iter().map(|project| self.project_card(project)))
    }

    fn publications(&self) -> impl Element + use<> {
        let group = |title: &'static str, kind: PublicationKind| {
            Column::new()
                .s(Gap::new().y(12))
                .item(Self::heading(title, 22))
                .items(publications_of(kind).map(Self::publication))
        };
        Column::new()
            .s(Padding::new().x(24).y(32))
            .s(Gap::new().y(24))
            .item(self.link("← Back to About", "/#about", LinkOrigin::Content))
            .item(Self::heading(Page::Publications.heading(), 32))
            .item(group("Journal Articles", PublicationKind::Journal))
            .item(group("Conference Papers", PublicationKind::Conference))
            .item(group("Dissertation", PublicationKind::Dissertation))
    }

    fn publication(publication: &'static Publication) -> impl Element {
        Column::new()
            .s(Gap::new().y(4))
            .item(
                Link::new()
                    .s(Font::new().weight(FontWeight::SemiBold).color(color!(ACCENT)))
                    .label(publication.title)
                    .to(publication.link)
                    .new_tab(NewTab::new()),
            )
            .item(El::new().s(Font::new().size(14)).child(publication.authors))
            .item(
                El::new()
                    .s(Font::new().size(13).italic().color(color!("#6b7280")))
                    .child(format!("{} ({})", publication.venue, publication.year)),
            )
            .item(publication.summary.map(|text| Paragraph::new().s(Font::new().size(14)).content(text)))
    }

    fn not_found(&self) -> impl Element + use<> {
        Column::new()
            .s(Padding::new().x(24).y(64))
            .s(Gap::new().y(16))
            .item(Self::heading(Page::NotFound.heading(), 32))
            .item(self.link("Go home", "/", LinkOrigin::Content))
    }

    fn footer(&self) -> impl Element + use<> {
        Row::new()
            .s(Width::fill())
            .s(Padding::new().x(24).y(24))
            .s(Gap::new().x(16))
            .s(Background::new().color(color!("#111827")))
            .s(Font::new().color(color!("#d1d5db")).size(14))
            .items(NAV_LINKS.iter().map(|link| self.link(link.label, link.href, LinkOrigin::SiteNav)))
            .item(El::new().s(Width::fill()))
            .item(El::new().child(format!("© {}", self.config.base_title)))
    }
}

/// A project article: table of contents, disclaimer and section anchors.
#[derive(Clone)]
struct Article {
    site: Site,
    page: Page,
    active: Mutable<Option<String>>,
    drawer: Mutable<TocDrawer>,
    disclaimer: Mutable<DisclaimerBanner>,
    tracker: Rc<RefCell<Option<SectionTracker>>>,
}

impl Article {
    fn new(site: Site, page: Page) -> Self {
        Self {
            site,
            page,
            active: Mutable::new(None),
            drawer: Mutable::new(TocDrawer::default()),
            disclaimer: Mutable::new(DisclaimerBanner::new(
                DisclaimerVariant::Random,
                true,
                &mut RandomPicker,
            )),
            tracker: Rc::new(RefCell::new(None)),
        }
    }

    fn root(&self) -> impl Element + use<> {
        Row::new()
            .s(Width::fill())
            .s(Align::new().top())
            .s(Padding::new().x(24).y(32))
            .s(Gap::new().x(32))
            .item(self.toc())
            .item(self.body())
            .update_raw_el({
                let this = self.clone();
                move |raw_el| {
                    raw_el
                        .after_insert({
                            let this = this.clone();
                            move |_| this.track_sections()
                        })
                        .after_remove(move |_| {
                            this.tracker.borrow_mut().take();
                        })
                }
            })
    }

    fn track_sections(&self) {
        let ids = self.page.sections().iter().map(|section| section.id);
        let tracker = SectionTracker::observe(ids, self.site.config.reading_band, self.active.clone());
        *self.tracker.borrow_mut() = tracker;
    }

    fn toc(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::exact(260))
            .s(Gap::new().y(8))
            .update_raw_el(|raw_el| raw_el.style("position", "sticky").style("top", "96px"))
            .item(
                Button::new()
                    .s(Font::new().weight(FontWeight::SemiBold))
                    .label("Contents")
                    .on_press({
                        let drawer = self.drawer.clone();
                        move || drawer.update_mut(TocDrawer::toggle)
                    }),
            )
            .items_signal_vec(
                self.active
                    .signal_cloned()
                    .map({
                        let sections = self.page.sections();
                        move |active| toc_entries(sections, active.as_deref())
                    })
                    .to_signal_vec()
                    .map({
                        let this = self.clone();
                        move |entry| this.toc_link(entry)
                    }),
            )
    }

    fn toc_link(&self, entry: TocEntry) -> impl Element + use<> {
        let navigation = self.site.navigation.clone();
        let drawer = self.drawer.clone();
        let TocEntry { id, label, href, active } = entry;
        Link::new()
            .s(Font::new()
                .size(14)
                .color(if active { color!(ACCENT) } else { color!("#4b5563") })
                .weight(if active { FontWeight::SemiBold } else { FontWeight::Regular }))
            .label(label)
            .to(href.clone())
            .update_raw_el(move |raw_el| {
                raw_el
                    .attr("data-section", id)
                    .event_handler_with_options(EventOptions::new().preventable(), move |event: events::Click| {
                        event.prevent_default();
                        drawer.update_mut(TocDrawer::pick_section);
                        navigation.follow(&href, LinkOrigin::TableOfContents);
                    })
            })
    }

    fn body(&self) -> impl Element + use<> {
        let project = self.page.project();
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(16))
            .item(self.site.link("← Back to Projects", "/#projects", LinkOrigin::Content))
            .item_signal(self.disclaimer.signal_cloned().map({
                let disclaimer = self.disclaimer.clone();
                move |banner| banner.is_visible().then(|| Self::disclaimer(&banner, disclaimer.clone()))
            }))
            .item(Site::heading(self.page.heading(), 34))
            .item(project.map(|project| Paragraph::new().content(project.description)))
            .items(self.page.sections().iter().map(|section| {
                self.site.section(section.id, Site::heading(section.label, 24))
            }))
    }

    fn disclaimer(banner: &DisclaimerBanner, state: Mutable<DisclaimerBanner>) -> impl Element + use<> {
        let copy = banner.copy();
        Column::new()
            .s(Padding::all(12))
            .s(Gap::new().y(6))
            .s(RoundedCorners::new().right(12))
            .s(Borders::new().left(Border::new().width(4).color(color!("#f59e0b"))))
            .s(Background::new().color(color!("#fffbeb")))
            .item(
                Row::new()
                    .item(El::new().s(Width::fill()).s(Font::new().weight(FontWeight::SemiBold)).child(copy.title))
                    .item(banner.is_dismissible().then(move || {
                        Button::new()
                            .label("✕")
                            .update_raw_el(|raw_el| raw_el.attr("aria-label", "Dismiss warning"))
                            .on_press(move || {
                                state.update_mut(|banner| {
                                    banner.dismiss();
                                })
                            })
                    })),
            )
            .items(copy.paragraphs.iter().map(|text| Paragraph::new().s(Font::new().size(13)).content(*text)))
    }
}
