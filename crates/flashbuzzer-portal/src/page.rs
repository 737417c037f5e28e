//! Configuration page rendering.

use alloc::string::{String, ToString};

use flashbuzzer_core::{GroupEntry, GroupView, TypedValue};

const HOME_TAB: &str = "home";

const PAGE_HEAD: &str = "<!DOCTYPE html><html><head>\
<meta charset='utf-8'><meta name='viewport' content='width=device-width, initial-scale=1'>\
<style>\
body{margin:0;font-family:Arial,sans-serif;background:#f0f0f0}\
.header{background:#fff;padding:10px 0;position:sticky;top:0;text-align:center;box-shadow:0 2px 4px rgba(0,0,0,.1)}\
.header h1{font-size:2.5em;color:#333;margin:10px 0}\
.tabs{display:flex;justify-content:center;margin-top:20px}\
ul{list-style:none;padding:0;margin:0;width:80%;display:flex;overflow-x:auto}\
li{flex:1;text-align:center;margin-right:10px}\
a{display:block;font-size:1.5em;color:#333;padding:10px;background:#f0f0f0;border:1px solid #ccc;border-radius:5px;cursor:pointer}\
a:hover{background:#ddd}\
.tab{display:none;width:80%;margin:20px auto}\
.active{display:block}\
form{background:#fff;padding:20px;border-radius:10px;box-shadow:0 4px 8px rgba(0,0,0,.1)}\
label,input{display:block;width:100%;margin-bottom:3px;font-size:1.5em;box-sizing:border-box}\
label{font-weight:bold}\
input{padding:10px;border:1px solid #ccc;border-radius:5px}\
input[type=submit]{background:#333;color:#fff;border:none;cursor:pointer}\
input[type=submit]:hover{background:#45a049}\
</style>\
<script>\
function openTab(id){\
var tabs=document.getElementsByClassName('tab');\
for(var i=0;i<tabs.length;i++){tabs[i].style.display='none';}\
document.getElementById(id).style.display='block';}\
</script>";

/// Render the configuration page.
///
/// Ungrouped parameters go to the Home tab, every group gets its own tab.
/// Labels show the leaf name, inputs carry the full parameter name.
pub fn render_page(title: &str, view: &GroupView<'_>) -> String {
    let mut page = String::with_capacity(4096);
    write_page(&mut page, title, view);
    page
}

fn write_page(out: &mut String, title: &str, view: &GroupView<'_>) {
    out.push_str(PAGE_HEAD);
    out.push_str("<title>");
    escape_html(out, title);
    out.push_str("</title></head><body><div class='header'><h1>");
    escape_html(out, title);
    out.push_str("</h1></div>");

    out.push_str("<div class='tabs'><ul>");
    out.push_str("<li><a onclick=\"openTab('");
    out.push_str(HOME_TAB);
    out.push_str("')\">Home</a></li>");
    for group in view.group_names() {
        out.push_str("<li><a onclick=\"openTab('tab-");
        escape_html(out, group);
        out.push_str("')\">");
        escape_html(out, group);
        out.push_str("</a></li>");
    }
    out.push_str("</ul></div>");

    out.push_str("<div id='");
    out.push_str(HOME_TAB);
    out.push_str("' class='tab active'>");
    if view.ungrouped.is_empty() {
        out.push_str("<form><p>No parameters available on this page.</p></form>");
    } else {
        write_form(out, &view.ungrouped);
    }
    out.push_str("</div>");

    for (group, entries) in &view.groups {
        out.push_str("<div id='tab-");
        escape_html(out, group);
        out.push_str("' class='tab'>");
        write_form(out, entries);
        out.push_str("</div>");
    }

    out.push_str("</body></html>");
}

fn write_form(out: &mut String, entries: &[GroupEntry<'_>]) {
    out.push_str("<form action='/submit' method='POST'>");
    for entry in entries {
        out.push_str("<label for='");
        escape_html(out, entry.name);
        out.push_str("'>");
        escape_html(out, entry.leaf);
        out.push_str(":</label>");

        match entry.value {
            TypedValue::Text(_) => out.push_str("<input type='text'"),
            TypedValue::Number(_) => out.push_str("<input type='number' step='any'"),
        }
        out.push_str(" id='");
        escape_html(out, entry.name);
        out.push_str("' name='");
        escape_html(out, entry.name);
        out.push_str("' value='");
        // numbers use the shortest form that parses back to the same value
        escape_html(out, &entry.value.to_string());
        out.push_str("'>");
    }
    out.push_str("<input type='submit' value='Submit'></form>");
}

/// Append `text` with HTML special characters escaped.
pub fn escape_html(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}
