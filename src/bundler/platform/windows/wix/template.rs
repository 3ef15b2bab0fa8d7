//! WiX source template.
//!
//! `install_tree` is pre-rendered XML and is inserted unescaped; every other
//! value goes through the default escaper.

pub const WXS_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- {{product_name}} {{channel}} {{version_short}} -->
<Wix xmlns="http://wixtoolset.org/schemas/v4/wxs" xmlns:ui="http://wixtoolset.org/schemas/v4/wxs/ui">
  <Package Name="{{product_name}}" Manufacturer="{{manufacturer}}" Version="{{version}}" ProductCode="{{product_guid}}" UpgradeCode="{{product_guid}}" Language="{{language}}" Scope="{{scope}}" Compressed="yes">
    <SummaryInformation Description="{{product_name}}" Manufacturer="{{manufacturer}}" />
    <MediaTemplate EmbedCab="yes" />

    <Icon Id="ProductIcon.ico" SourceFile="{{icon}}" />
    <Property Id="ARPPRODUCTICON" Value="ProductIcon.ico" />
    <Property Id="ARPCOMMENTS" Value="{{comments}}" />
    <Property Id="ARPHELPLINK" Value="{{help_link}}" />
    <Property Id="ARPREADME" Value="{{readme_link}}" />
    <Property Id="ARPCONTACT" Value="{{contact}}" />

    <WixVariable Id="WixUILicenseRtf" Value="{{license}}" />
    <WixVariable Id="WixUIBannerBmp" Value="{{banner_image}}" />
    <WixVariable Id="WixUIDialogBmp" Value="{{background_image}}" />
{{#if install_dir_ui}}
    <Property Id="WIXUI_INSTALLDIR" Value="INSTALLDIR" />
{{/if}}
    <ui:WixUI Id="{{ui}}" />

    <StandardDirectory Id="{{program_files}}">
      <Directory Id="INSTALLDIR" Name="{{product_name}}">
{{{install_tree}}}      </Directory>
    </StandardDirectory>

    <StandardDirectory Id="ProgramMenuFolder">
      <Directory Id="ProgramMenuDir" Name="{{product_name}}">
        <Component Id="StartMenuShortcuts" Guid="{{start_menu_guid}}" Bitness="{{bitness}}">
{{#each start_menu_shortcuts}}
          <Shortcut Id="{{id}}" Name="{{name}}" Target="{{target}}"{{#if arguments}} Arguments="{{arguments}}"{{/if}} WorkingDirectory="INSTALLDIR" />
{{/each}}
          <RemoveFolder Id="ProgramMenuDir" On="uninstall" />
          <RegistryValue Root="HKMU" Key="{{registry_key}}" Name="StartMenuShortcuts" Type="integer" Value="1" KeyPath="yes" />
        </Component>
      </Directory>
    </StandardDirectory>

    <StandardDirectory Id="DesktopFolder">
      <Component Id="DesktopShortcuts" Guid="{{desktop_guid}}" Bitness="{{bitness}}">
{{#each desktop_shortcuts}}
        <Shortcut Id="{{id}}" Name="{{name}}" Target="{{target}}"{{#if arguments}} Arguments="{{arguments}}"{{/if}} WorkingDirectory="INSTALLDIR" />
{{/each}}
        <RegistryValue Root="HKMU" Key="{{registry_key}}" Name="DesktopShortcuts" Type="integer" Value="1" KeyPath="yes" />
      </Component>
    </StandardDirectory>

    <Feature Id="MainFeature" Title="{{product_name}}" Level="1">
{{#each component_refs}}
      <ComponentRef Id="{{this}}" />
{{/each}}
      <ComponentRef Id="StartMenuShortcuts" />
      <ComponentRef Id="DesktopShortcuts" />
    </Feature>
  </Package>
</Wix>
"#;
