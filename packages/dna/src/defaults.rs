//! Per-block-type default override trees.
//!
//! When a block is dropped onto a page it starts from the tree returned
//! here. The factory is pure: every call builds a fresh tree, so callers can
//! mutate the result freely without bleeding into later blocks.
//!
//! Block-type tags are positional codes (`B0201` = hero, `B0901` = spacer,
//! ...); older semantic names are aliases resolved before lookup so legacy
//! project files keep working.

use serde_json::{json, Value};

/// Map legacy semantic block names onto their canonical tags.
/// Unrecognized names pass through unchanged.
pub fn resolve_alias(block_type: &str) -> &str {
    match block_type {
        "Navbar" => "B0101",
        "Hero" => "B0201",
        "Hero_Video" => "B0202",
        "Hero_3D" => "B0203",
        "Skills" => "B0301",
        "Skills_Bento" => "B0302",
        "Article" => "B0401",
        "Article_Index" => "B0402",
        "Portfolio" => "B0501",
        "Portfolio_Tilt" => "B0503",
        "Timeline" => "B0601",
        "Timeline_Horizontal" => "B0602",
        "Accordion" => "B0701",
        "Stats" => "B0801",
        "Spacer" => "B0901",
        "Tabs" => "B1001",
        "ContactForm" => "B1301",
        "Footer" => "B1401",
        "Badges" => "B1501",
        "Preview" => "B1601",
        "Preview_Multi" => "B1602",
        "Methodology" => "B1701",
        "TechStack" => "B1801",
        "FeaturedProject" => "B1901",
        "ProjectsGrid" => "B1902",
        "CodeShowcase" => "B1903",
        "Logos" => "B2101",
        "Testimonials" => "B2201",
        "Reviews" => "B2201",
        // Old diagnostic block, re-mapped onto reviews
        "RadarChart" => "B2201",
        "Reviews_Marquee" => "B2202",
        "Socials" => "B2401",
        "SocialDock" => "B2401",
        "IdentityCard" => "B2501",
        other => other,
    }
}

/// Build the default override tree for a block type.
///
/// Unknown types get a minimal skeleton rather than an error; the editor
/// treats every tag as addable.
pub fn block_defaults(block_type: &str) -> Value {
    match resolve_alias(block_type) {
        "B0101" => navbar_defaults(Value::Null),
        "B0102" => navbar_defaults(json!("rgba(255,255,255,0.05)")),
        "B0201" => json!({
            "data": {
                "title": "ULTIMATE UI SYNCHRONIZATION",
                "title_uk": "НАЙКРАЩА СИНХРОНІЗАЦІЯ ІНТЕРФЕЙСУ",
                "title_ru": "ПРЕВОСХОДНАЯ СИНХРОНИЗАЦИЯ ИНТЕРФЕЙСА",
                "title_es": "SINCRONIZACIÓN ÚLTIMA DE INTERFAZ",
                "title_fr": "SYNCHRONISATION ULTIME DE L'INTERFACE",
                "title_de": "ULTIMATIVE UI-SYNCHRONISATION",
                "title_pl": "NAJLEPSZA SYNCHRONIZACJA INTERFEJSU",
                "titleTypo": { "useGlobal": true, "fontSize": "64", "fontWeight": "900", "letterSpacing": "-0.04", "lineHeight": "0.9", "uppercase": true },
                "description": "14-Node architectural grid active. System stability: 100%. Synchronizing DNA with global parameters.",
                "description_uk": "Активна архітектурна сітка з 14 вузлів. Стабільність системи: 100%. Синхронізація ДНК з глобальними параметрами.",
                "description_ru": "Активна архитектурная сетка из 14 узлов. Стабильность системы: 100%. Синхронизация ДНК с глобальными параметрами.",
                "description_es": "Cuadrícula arquitectónica de 14 nodos activa. Estabilidad del sistema: 100%. Sincronizando ADN con parámetros globales.",
                "description_fr": "Grille architecturale de 14 nœuds active. Stabilité du système : 100 %. Synchronisation de l'ADN avec les paramètres globaux.",
                "description_de": "14-Knoten-Architekturgitter aktiv. Systemstabilität: 100%. DNA-Synchronisierung mit globalen Parametern.",
                "description_pl": "Aktywna siatka architektoniczna 14 węzłów. Stabilność systemu: 100%. Synchronizacja DNA z parametrami globalnymi.",
                "descriptionTypo": { "useGlobal": true, "fontSize": "20", "fontWeight": "400", "letterSpacing": "0", "lineHeight": "1.6", "uppercase": false },
                "primaryBtnText": "Initialize System", "primaryBtnVisible": true,
                "secondaryBtnText": "View Protocol", "secondaryBtnVisible": true
            },
            "layout": { "height": "85vh", "alignment": "center", "paddingTop": "80px" },
            "style": { "useGlobalDNA": true, "bgFill": "", "titleColor": "", "descColor": "" },
            "media": { "showImage": false, "imageUrl": "", "imagePosition": "right", "imageOpacity": 100, "imageScale": 100 },
            "background": { "lockBackground": false, "fixedColor": "#FFFFFF" },
            "btnUseGlobal": true,
            "animation": { "useGlobal": true, "duration": "0.8", "stagger": "0.1", "entranceY": "40" }
        }),
        "B0202" => json!({
            "data": {
                "title": "IMMERSIVE VIDEO EXPERIENCE",
                "titleTypo": { "useGlobal": true, "fontSize": "84", "fontWeight": "900", "letterSpacing": "-0.05", "lineHeight": "0.8", "uppercase": true },
                "description": "Dynamic video masking active. High-fidelity motion architecture initialized.",
                "descriptionTypo": { "useGlobal": true, "fontSize": "20", "fontWeight": "400", "letterSpacing": "0", "lineHeight": "1.6", "uppercase": false },
                "primaryBtnText": "Explore Motion", "primaryBtnVisible": true,
                "secondaryBtnText": "Read Specs", "secondaryBtnVisible": true
            },
            "layout": { "height": "100vh", "alignment": "center", "paddingTop": "0px" },
            "style": { "useGlobalDNA": true, "bgFill": "transparent" },
            "media": { "type": "video", "mask": "text", "videoUrl": "https://cdn.pixabay.com/video/2016/09/21/5361-183768461_large.mp4", "opacity": 100 },
            "background": { "lockBackground": true, "fixedColor": "#000000" },
            "btnUseGlobal": true,
            "animation": { "useGlobal": true, "duration": "1.2", "stagger": "0.2" }
        }),
        "B0203" => json!({
            "data": {
                "title": "3D NEURAL INTERFACE",
                "titleTypo": { "useGlobal": true, "fontSize": "64", "fontWeight": "900", "letterSpacing": "-0.02", "lineHeight": "1.0", "uppercase": true },
                "description": "Interactive 3D node orchestration. Real-time mouse response active.",
                "objectType": "sphere",
                "splineLink": "https://prod.spline.design/scene-placeholder"
            },
            "layout": { "height": "100vh", "alignment": "center", "paddingTop": "0px" },
            "style": { "useGlobalDNA": true, "background": "transparent" },
            "media": { "show3D": true, "interactive": true, "sensitivity": 1.0 },
            "physics": { "strength": 0.5, "friction": 0.1 },
            "btnUseGlobal": true,
            "animation": { "useGlobal": true }
        }),
        "B0301" => json!({
            "data": {
                "groups": [
                    { "id": "g1", "title": "Modular Architecture", "items": [{ "name": "React 18", "level": 95 }, { "name": "Zustand", "level": 90 }] },
                    { "id": "g2", "title": "Data Propagation", "items": [{ "name": "Immer", "level": 85 }, { "name": "DNA Sync", "level": 100 }] }
                ]
            },
            "layout": { "columns": "2", "gap": "60", "paddingY": "120" },
            "style": { "useGlobalDNA": true }
        }),
        "B0302" => json!({
            "data": {
                "groups": [
                    { "id": "g1", "title": "Core Stack", "items": [{ "name": "Typescript", "level": 98 }, { "name": "Vite", "level": 95 }] },
                    { "id": "g2", "title": "Design System", "items": [{ "name": "Tailwind", "level": 90 }, { "name": "Framer", "level": 85 }] }
                ]
            },
            "layout": { "grid": "bento", "gap": "20", "paddingY": "120" },
            "style": { "useGlobalDNA": true, "glass": true },
            "animation": { "useGlobal": true }
        }),
        "B0401" => json!({
            "data": {
                "title": "THE NEURAL INTERFACE PROTOCOL",
                "subtitle": "V1.2 SPECIFICATION",
                "body": "Our 14-node architecture ensures that every component is strictly bound to the DNA Matrix. By manipulating global genetic parameters, designers can reskin entire applications in seconds while maintaining structural integrity."
            },
            "layout": { "paddingY": "120", "maxWidth": "850", "textAlign": "left" },
            "style": { "useGlobalDNA": true, "fontSize": "18", "lineHeight": "1.8" }
        }),
        "B0402" => json!({
            "data": {
                "title": "SMART INDEX ARCHITECTURE",
                "sections": [
                    { "id": "s1", "title": "Initialization", "content": "Base neural layer setup..." },
                    { "id": "s2", "title": "Propagation", "content": "Data flowing through nodes..." },
                    { "id": "s3", "title": "Finalization", "content": "Matrix synchronization complete." }
                ]
            },
            "layout": { "paddingY": "120", "sidebarWidth": "280", "sidebarPos": "left" },
            "style": { "useGlobalDNA": true, "highlightColor": "" },
            "animation": { "useGlobal": true }
        }),
        "B0501" => json!({
            "data": {
                "title": "SELECTED WORKS",
                "subtitle": "A curated collection of neural grid architectures and visual nodes.",
                "items": [
                    { "id": "p1", "title": "Neural Grid Alpha", "url": "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80" },
                    { "id": "p2", "title": "Matrix Sync Beta", "url": "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&q=80" },
                    { "id": "p3", "title": "Vector Node Gamma", "url": "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80" }
                ]
            },
            "layout": { "columns": "3", "gap": "30", "paddingY": "120" },
            "style": { "useGlobalDNA": true, "useGlobalRadius": true, "hoverScale": "1.05" }
        }),
        "B0503" => json!({
            "data": {
                "title": "INTERACTIVE GRID",
                "subtitle": "Dynamic physics-based presentation with neural depth synchronization.",
                "items": [
                    { "id": "m1", "title": "Tilt Grid Alpha", "url": "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80" },
                    { "id": "m2", "title": "Tilt Grid Beta", "url": "https://images.unsplash.com/photo-1518770660439-4636190af475?auto=format&fit=crop&q=80" },
                    { "id": "m3", "title": "Tilt Grid Gamma", "url": "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?auto=format&fit=crop&q=80" }
                ]
            },
            "layout": { "columns": "masonry", "gap": "20", "paddingY": "120" },
            "style": { "useGlobalDNA": true, "tiltEffect": true, "depth": 30 },
            "physics": { "strength": 0.8, "friction": 0.15 },
            "animation": { "useGlobal": true }
        }),
        "B0601" => json!({
            "data": {
                "title": "EVOLUTIONARY ROADMAP",
                "items": [
                    { "date": "2023", "title": "Alpha Node", "desc": "Core genetic engine finalized." },
                    { "date": "2024", "title": "Matrix Integration", "desc": "14-node architecture deployed." }
                ]
            },
            "layout": { "paddingY": "120", "gap": "60" },
            "style": { "useGlobalDNA": true }
        }),
        "B0602" => json!({
            "data": {
                "title": "HORIZONTAL TIMELINE",
                "items": [
                    { "date": "2021", "title": "Origin", "desc": "Core node conceived." },
                    { "date": "2022", "title": "Expansion", "desc": "Genetic matrix deployed." },
                    { "date": "2023", "title": "Nexus", "desc": "Global synchronization live." }
                ]
            },
            "layout": { "paddingY": "160", "scrollPath": "horizontal" },
            "style": { "useGlobalDNA": true, "trackColor": "" },
            "animation": { "useGlobal": true }
        }),
        "B0701" => json!({
            "data": {
                "title": "SYSTEM FREQUENCY (FAQ)",
                "items": [
                    { "id": "f1", "question": "How does DNA Synchronization work?", "answer": "It propagates global parameters across 14 architectural nodes." },
                    { "id": "f2", "question": "Is the grid modular?", "answer": "Yes, every block is a discrete node within the GEN matrix." }
                ]
            },
            "layout": { "paddingY": "120", "maxWidth": "800" },
            "style": { "useGlobalDNA": true, "accent": "" },
            "animation": { "useGlobal": true }
        }),
        "B0801" => json!({
            "data": {
                "stats": [
                    { "value": "100%", "label": "Stability" },
                    { "value": "14", "label": "Nodes Sync" },
                    { "value": "256ms", "label": "Latency" }
                ]
            },
            "layout": { "paddingY": "120", "columns": "3" },
            "style": { "useGlobalDNA": true }
        }),
        "B0901" => json!({
            "data": {},
            "layout": { "height": "80" },
            "style": { "useGlobalDNA": true }
        }),
        "B1001" => json!({
            "data": {
                "tabs": [
                    { "id": "t1", "label": "Architecture", "content": "Node-based modular system." },
                    { "id": "t2", "label": "Propagation", "content": "Real-time state synchronization." }
                ]
            },
            "layout": { "paddingY": "120" },
            "style": { "useGlobalDNA": true, "variant": "solid" },
            "animation": { "useGlobal": true }
        }),
        "B1301" => json!({
            "data": { "title": "ESTABLISH LINK", "subtitle": "Direct neural interface connection for project orchestration." },
            "layout": { "paddingY": "120" },
            "style": { "useGlobalDNA": true }
        }),
        "B1401" => json!({
            "data": { "companyName": "000-GEN" },
            "layout": { "paddingTop": "80", "paddingBottom": "80" },
            "style": { "useGlobalDNA": true }
        }),
        "B1501" => json!({
            "data": { "tags": ["STABLE", "SYNCHRONIZED", "MODULAR", "DNA-BOUND", "ACTIVE"] },
            "layout": { "paddingY": "60", "gap": "16" },
            "style": { "useGlobalDNA": true }
        }),
        "B1601" => json!({
            "data": { "title": "Diagnostic Neural Feed", "url": "https://images.unsplash.com/photo-1639322537228-f710d846310a?auto=format&fit=crop&q=80" },
            "layout": { "paddingY": "120", "aspect": "16/9" },
            "style": { "useGlobalDNA": true }
        }),
        "B1602" => json!({
            "data": {
                "title": "MULTI-DEVICE ECOSYSTEM",
                "previewUrl": "https://images.unsplash.com/photo-1639322537228-f710d846310a?auto=format&fit=crop&q=80"
            },
            "layout": { "paddingY": "140", "stackOffset": "60" },
            "style": { "useGlobalDNA": true, "devices": ["macbook", "ipad", "iphone"] },
            "animation": { "useGlobal": true }
        }),
        "B1701" => json!({
            "data": {
                "title": "Our Methodology",
                "description": "A systematic approach to delivering exceptional results",
                "steps": [
                    { "number": "01", "title": "Discovery", "description": "Understanding your vision, goals, and requirements through in-depth consultation" },
                    { "number": "02", "title": "Strategy", "description": "Crafting a comprehensive plan aligned with your objectives and market needs" },
                    { "number": "03", "title": "Design", "description": "Creating stunning visuals and user experiences that captivate and convert" },
                    { "number": "04", "title": "Development", "description": "Building robust, scalable solutions with cutting-edge technologies" },
                    { "number": "05", "title": "Launch", "description": "Deploying your project with precision and ongoing support" }
                ]
            },
            "layout": { "paddingY": "80", "style": "vertical" },
            "style": { "useGlobalDNA": true }
        }),
        "B1801" => json!({
            "data": {
                "title": "Technology Stack",
                "description": "Cutting-edge tools and frameworks powering our solutions",
                "categories": [
                    { "id": "frontend", "name": "Frontend", "icon": "code", "color": "#3B82F6", "technologies": ["React", "Next.js", "TypeScript", "Tailwind CSS", "Framer Motion"] },
                    { "id": "backend", "name": "Backend", "icon": "database", "color": "#10B981", "technologies": ["Node.js", "Python", "PostgreSQL", "MongoDB", "Redis"] },
                    { "id": "design", "name": "Design", "icon": "palette", "color": "#F59E0B", "technologies": ["Figma", "Adobe XD", "Sketch", "Blender", "After Effects"] },
                    { "id": "devops", "name": "DevOps", "icon": "cloud", "color": "#8B5CF6", "technologies": ["Docker", "Kubernetes", "AWS", "Vercel", "GitHub Actions"] },
                    { "id": "tools", "name": "Tools", "icon": "zap", "color": "#EC4899", "technologies": ["Git", "VS Code", "Postman", "Jira", "Notion"] },
                    { "id": "security", "name": "Security", "icon": "shield", "color": "#EF4444", "technologies": ["OAuth", "JWT", "SSL/TLS", "OWASP", "Cloudflare"] }
                ]
            },
            "layout": { "paddingY": "80" },
            "style": { "useGlobalDNA": true }
        }),
        "B1901" => json!({
            "data": {
                "title": "Featured Project",
                "projectName": "DNA Portfolio System",
                "description": "A cutting-edge portfolio builder with advanced DNA-based theming system. Features include real-time preview, drag-and-drop interface, and seamless export capabilities.",
                "image": "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=1200&h=800&fit=crop",
                "tags": ["React", "TypeScript", "Framer Motion", "Tailwind CSS"],
                "liveUrl": "https://example.com",
                "githubUrl": "https://github.com/example/project"
            },
            "layout": { "paddingY": "80", "imagePosition": "right" },
            "style": { "useGlobalDNA": true }
        }),
        "B1902" => json!({
            "data": {
                "title": "Projects",
                "description": "A collection of my recent work and experiments",
                "projects": [
                    {
                        "id": "1",
                        "name": "E-Commerce Platform",
                        "description": "Modern online shopping experience with real-time inventory",
                        "image": "https://images.unsplash.com/photo-1557821552-17105176677c?w=600&h=400&fit=crop",
                        "tags": ["React", "Node.js", "MongoDB"],
                        "liveUrl": "https://example.com",
                        "githubUrl": "https://github.com"
                    },
                    {
                        "id": "2",
                        "name": "Task Management App",
                        "description": "Collaborative workspace for teams with real-time updates",
                        "image": "https://images.unsplash.com/photo-1484480974693-6ca0a78fb36b?w=600&h=400&fit=crop",
                        "tags": ["Vue.js", "Firebase", "Tailwind"],
                        "liveUrl": "https://example.com",
                        "githubUrl": "https://github.com"
                    },
                    {
                        "id": "3",
                        "name": "Analytics Dashboard",
                        "description": "Data visualization platform with interactive charts",
                        "image": "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600&h=400&fit=crop",
                        "tags": ["Next.js", "D3.js", "PostgreSQL"],
                        "liveUrl": "https://example.com",
                        "githubUrl": "https://github.com"
                    },
                    {
                        "id": "4",
                        "name": "Social Media App",
                        "description": "Connect and share with friends in real-time",
                        "image": "https://images.unsplash.com/photo-1611162617474-5b21e879e113?w=600&h=400&fit=crop",
                        "tags": ["React Native", "GraphQL", "AWS"],
                        "liveUrl": "https://example.com",
                        "githubUrl": "https://github.com"
                    }
                ]
            },
            "layout": { "paddingY": "80", "columns": "2" },
            "style": { "useGlobalDNA": true }
        }),
        "B1903" => json!({
            "data": {
                "title": "Code Showcase",
                "description": "Clean, efficient code examples from my projects",
                "snippets": [
                    {
                        "id": "1",
                        "title": "React Custom Hook",
                        "language": "typescript",
                        "code": "import { useState, useEffect } from 'react';\n\nexport const useLocalStorage = (key: string, initialValue: any) => {\n  const [value, setValue] = useState(() => {\n    const stored = localStorage.getItem(key);\n    return stored ? JSON.parse(stored) : initialValue;\n  });\n\n  useEffect(() => {\n    localStorage.setItem(key, JSON.stringify(value));\n  }, [key, value]);\n\n  return [value, setValue];\n};"
                    },
                    {
                        "id": "2",
                        "title": "API Utility Function",
                        "language": "javascript",
                        "code": "const fetchWithRetry = async (url, options = {}, retries = 3) => {\n  try {\n    const response = await fetch(url, options);\n    if (!response.ok) throw new Error('Request failed');\n    return await response.json();\n  } catch (error) {\n    if (retries > 0) {\n      await new Promise(resolve => setTimeout(resolve, 1000));\n      return fetchWithRetry(url, options, retries - 1);\n    }\n    throw error;\n  }\n};"
                    }
                ]
            },
            "layout": { "paddingY": "80" },
            "style": { "useGlobalDNA": true }
        }),
        "B2101" => json!({
            "data": { "items": [{ "id": "1", "name": "Alpha" }, { "id": "2", "name": "Beta" }, { "id": "3", "name": "Gamma" }] },
            "layout": { "paddingY": "60" },
            "style": { "useGlobalDNA": true }
        }),
        "B2201" => json!({
            "data": {
                "items": [
                    { "quote": "The most stable architectural grid ever built.", "name": "Dr. Evelyn Wright", "role": "CTO @ Nexus" },
                    { "quote": "Genetic design changed our entire workflow.", "name": "James Vector", "role": "Design Lead" }
                ]
            },
            "layout": { "paddingY": "120", "columns": "2" },
            "style": { "useGlobalDNA": true, "useGlobalRadius": true }
        }),
        "B2202" => json!({
            "data": {
                "items": [
                    { "quote": "Absolute architectural perfection.", "author": "A. Jensen" },
                    { "quote": "The speed of synchronization is unprecedented.", "author": "M. Vercetti" },
                    { "quote": "DNA-based design is the future.", "author": "S. Kusanagi" }
                ]
            },
            "layout": { "paddingY": "80", "speed": "40", "direction": "left" },
            "style": { "useGlobalDNA": true, "marquee": true },
            "animation": { "useGlobal": true }
        }),
        "B2401" => json!({
            "data": { "platforms": [{ "type": "github", "url": "#" }, { "type": "twitter", "url": "#" }, { "type": "linkedin", "url": "#" }] },
            "layout": { "paddingY": "60", "position": "center" },
            "style": { "useGlobalDNA": true }
        }),
        "B2501" => json!({
            "data": {
                "title": "IDENTITY PROFILE",
                "subtitle": "Digital Access Card",
                "images": [
                    { "url": "https://images.unsplash.com/photo-1535713875002-d1d0cf377fde?w=100", "shape": "circle" },
                    { "url": "https://api.qrserver.com/v1/create-qr-code/?size=100x100&data=DNA", "shape": "square" },
                    { "url": "https://images.unsplash.com/photo-1599566150163-29194dcaad36?w=100", "shape": "circle" }
                ],
                "buttons": [{ "label": "MESSAGE", "url": "#" }, { "label": "SAVE", "url": "#" }],
                "text": "USER_IDENT_01 // ACCESS_GRANTED"
            },
            "layout": { "paddingY": "40", "textSize": "12", "titleSize": "18", "subtitleSize": "12" },
            "style": { "bgFill": "rgba(255,255,255,0.02)" }
        }),
        _ => json!({
            "data": {},
            "layout": {},
            "style": { "useGlobalDNA": true },
            "animation": { "useGlobal": true }
        }),
    }
}

/// B0101 (transparent) and B0102 (filled) share everything except the
/// surface fill behind the bar.
fn navbar_defaults(surface_fill: Value) -> Value {
    json!({
        "data": {
            "header": "000-GEN",
            "links": [{ "label": "System", "url": "#" }, { "label": "Nodes", "url": "#" }],
            "stickyLogic": "true"
        },
        "control": { "F-C01": "header", "F-C06": "stickyLogic" },
        "layout": { "F-L04": "80", "F-L06": "100%", "paddingX": "40" },
        "style": { "F-S02": surface_fill, "F-S06": "true", "useGlobalDNA": true },
        "effects": { "F-E02": "slide-down" },
        "inheritance": "0111GL"
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_is_pure() {
        let a = block_defaults("B0201");
        let mut b = block_defaults("B0201");
        assert_eq!(a, b);

        // Mutating one tree must not leak into a later call
        b["data"]["title"] = json!("MUTATED");
        let c = block_defaults("B0201");
        assert_eq!(a, c);
        assert_ne!(b, c);
    }

    #[test]
    fn test_aliases_resolve_to_canonical_trees() {
        assert_eq!(block_defaults("Hero"), block_defaults("B0201"));
        assert_eq!(block_defaults("Spacer"), block_defaults("B0901"));
        assert_eq!(block_defaults("Testimonials"), block_defaults("B2201"));
        assert_eq!(block_defaults("Reviews"), block_defaults("B2201"));
        assert_eq!(block_defaults("RadarChart"), block_defaults("B2201"));
        assert_eq!(block_defaults("SocialDock"), block_defaults("B2401"));
    }

    #[test]
    fn test_unknown_type_gets_skeleton() {
        let tree = block_defaults("B9999");
        assert_eq!(tree["style"]["useGlobalDNA"], json!(true));
        assert_eq!(tree["animation"]["useGlobal"], json!(true));
        assert!(tree["data"].as_object().unwrap().is_empty());
        assert!(tree["layout"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_spacer_has_height_default() {
        let tree = block_defaults("B0901");
        assert_eq!(tree["layout"]["height"], json!("80"));
    }

    #[test]
    fn test_navbar_variants_differ_only_in_fill() {
        let mut a = block_defaults("B0101");
        let b = block_defaults("B0102");
        assert_eq!(a["style"]["F-S02"], Value::Null);
        assert_eq!(b["style"]["F-S02"], json!("rgba(255,255,255,0.05)"));

        a["style"]["F-S02"] = b["style"]["F-S02"].clone();
        assert_eq!(a, b);
    }
}
